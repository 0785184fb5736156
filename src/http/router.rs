use crate::app_context::AppContext;
use crate::cli::ServeArgs;
use crate::http::{cors, middleware};
use crate::{health, routes};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(args: &ServeArgs, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let api_routes = Router::new()
        .route("/health", get(health::handlers::healthcheck))
        .route("/route", post(routes::handlers::create));

    Router::new()
        .route("/", get(health::handlers::landing_page))
        .nest("/api", api_routes)
        .fallback(routes::handlers::not_found)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
