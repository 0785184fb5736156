//! Pick a start and an end point on a map, then ask the routing service whether the route works.
//!
//! [`frontend`] holds the client-side coordination (pickers, route form, HTTP client). The rest
//! is the routing service behind `POST /api/route`.

pub mod app_context;
pub mod cli;
pub mod env;
pub mod frontend;
pub mod health;
pub mod http;
pub mod logging;
pub mod map;
pub mod routes;
