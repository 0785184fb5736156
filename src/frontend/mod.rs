//! Client-side coordination: two location pickers feeding a route form that submits to the
//! routing service and keeps the latest outcome around for display.
//!
//! The map itself (tiles, geocoding, the search box) belongs to whatever [`MapWidget`] the
//! pickers are given. Nothing in here renders pixels.
//!
//! [`MapWidget`]: widget::MapWidget

pub mod client;
pub mod errors;
pub mod form;
pub mod headless;
pub mod outcome;
pub mod picker;
pub mod widget;
#[cfg(test)]
mod tests;
