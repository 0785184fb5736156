use crate::app_context::AppContext;
use crate::routes::requests::RouteRequest;
use crate::routes::responses::{RouteCreatedResponse, RouteErrorResponse};
use crate::routes::service::RouteHttpHandler;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

type RouteError = (StatusCode, Json<RouteErrorResponse>);

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<RouteCreatedResponse>, RouteError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::info!(task = "route_rejected", reason = %rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(RouteErrorResponse::new(rejection.body_text())),
        )
    })?;
    RouteHttpHandler::new(app_context)
        .create(request)
        .map(Json)
        .map_err(|rejection| {
            tracing::info!(task = "route_rejected", reason = %rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(RouteErrorResponse::new(rejection.to_string())),
            )
        })
}

pub async fn not_found() -> RouteError {
    (
        StatusCode::NOT_FOUND,
        Json(RouteErrorResponse::new("Not found")),
    )
}
