use axum::extract::{ConnectInfo, Request};
use axum::{middleware::Next, response::Response};
use std::net::SocketAddr;
use std::time::Instant;

const UNKNOWN_CLIENT_IP: &str = "unknown";

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = client_ip(&request);

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed().as_micros();

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        client_ip = %client_ip,
        status = response.status().as_u16(),
        processing_time_ms = elapsed_time / 1000,
    );

    response
}

/// First hop of `x-forwarded-for` when behind a proxy, otherwise the socket peer.
pub fn client_ip(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if let Some(forwarded) = forwarded {
        return forwarded.to_string();
    }
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(
            || UNKNOWN_CLIENT_IP.to_string(),
            |ConnectInfo(peer)| peer.ip().to_string(),
        )
}
