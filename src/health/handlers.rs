use crate::health::responses::{HealthCheckResponse, HealthStatus};
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: HealthStatus::Healthy,
    })
}

pub async fn landing_page() -> &'static str {
    "Hello World"
}
