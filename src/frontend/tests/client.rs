use super::doubles::RecordingWidget;
use crate::app_context::AppContext;
use crate::cli::tests::fake_serve_args;
use crate::frontend::client::{HttpRoutingClient, RoutingService};
use crate::frontend::errors::RoutingError;
use crate::frontend::form::RouteForm;
use crate::frontend::widget::WidgetEvent;
use crate::http::router;
use crate::map::models::Coordinate;
use crate::routes::models::Endpoint;
use crate::routes::requests::RouteRequest;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpRoutingClient {
    let endpoint = Url::parse(&format!("{}/api/route", server.uri()))
        .expect("Mock server URI should be a valid URL.");
    HttpRoutingClient::new(endpoint)
}

fn form_for(server: &MockServer) -> RouteForm<HttpRoutingClient, RecordingWidget> {
    RouteForm::new(
        client_for(server),
        RecordingWidget::default(),
        RecordingWidget::default(),
        None,
    )
}

#[tokio::test]
async fn test_unselected_form_posts_nulls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/route"))
        .and(body_json(json!({ "start": null, "end": null })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Start point is missing" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let mut form = form_for(&server);

    form.submit().await;

    assert_eq!(
        form.displayed().await.as_deref(),
        Some("Error: Start point is missing")
    );
}

#[tokio::test]
async fn test_selected_points_are_posted_and_message_displayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/route"))
        .and(body_json(json!({
            "start": { "lat": 34.05, "lng": -118.25 },
            "end": { "lat": 34.06, "lng": -118.20 },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Route created" })))
        .expect(1)
        .mount(&server)
        .await;
    let mut form = form_for(&server);
    form.picker_mut(Endpoint::Start)
        .handle(WidgetEvent::MapClicked(Coordinate::new(34.05, -118.25)));
    form.picker_mut(Endpoint::End)
        .handle(WidgetEvent::MapClicked(Coordinate::new(34.06, -118.20)));

    form.submit().await;

    assert_eq!(form.displayed().await.as_deref(), Some("Route created"));
}

#[tokio::test]
async fn test_rejection_is_prefixed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/route"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "error": "No path found" })))
        .mount(&server)
        .await;
    let mut form = form_for(&server);

    form.submit().await;

    assert_eq!(
        form.displayed().await.as_deref(),
        Some("Error: No path found")
    );
}

#[tokio::test]
async fn test_failure_without_error_payload_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/route"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.create_route(&RouteRequest::default()).await;

    assert!(matches!(result, Err(RoutingError::Unstructured { .. })));
    let mut form = form_for(&server);
    form.submit().await;
    assert_eq!(
        form.displayed().await.as_deref(),
        Some("Error: routing service responded with 500 Internal Server Error")
    );
}

#[tokio::test]
async fn test_success_without_message_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/route"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "route_id": 7 })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client
        .create_route(&RouteRequest::default())
        .await
        .expect_err("A body without `message` should not count as success.");

    assert!(matches!(err, RoutingError::MalformedResponse(_)));
    assert_eq!(err.to_string(), "unexpected response from the routing service");
    assert!(
        err.detail().contains("missing field `message`"),
        "cause was lost: {}",
        err.detail()
    );
    let mut form = form_for(&server);
    form.submit().await;
    assert_eq!(
        form.displayed().await.as_deref(),
        Some("Error: unexpected response from the routing service")
    );
}

#[tokio::test]
async fn test_unreachable_service_is_reported() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    // Nothing listens on the port once the listener is gone.
    drop(listener);
    let endpoint = Url::parse(&format!("http://{address}/api/route")).unwrap();
    let err = HttpRoutingClient::new(endpoint.clone())
        .create_route(&RouteRequest::default())
        .await
        .expect_err("Nothing should be listening.");
    assert!(matches!(err, RoutingError::Transport(_)));
    assert!(
        err.detail()
            .starts_with("could not reach the routing service: "),
        "cause was lost: {}",
        err.detail()
    );
    let mut form = RouteForm::new(
        HttpRoutingClient::new(endpoint),
        RecordingWidget::default(),
        RecordingWidget::default(),
        None,
    );

    form.submit().await;

    assert_eq!(
        form.displayed().await.as_deref(),
        Some("Error: could not reach the routing service")
    );
}

#[tokio::test]
async fn test_against_routing_service() {
    let args = fake_serve_args();
    let router = router::new(&args, AppContext::new(args.service_area()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    let endpoint = Url::parse(&format!("http://{address}/api/route")).unwrap();
    let mut form = RouteForm::new(
        HttpRoutingClient::new(endpoint),
        RecordingWidget::default(),
        RecordingWidget::default(),
        None,
    );
    form.picker_mut(Endpoint::Start)
        .handle(WidgetEvent::MapClicked(Coordinate::new(34.0219, -118.2841)));
    form.picker_mut(Endpoint::End)
        .handle(WidgetEvent::MapClicked(Coordinate::new(34.0522, -118.2437)));

    form.submit().await;
    assert_eq!(
        form.displayed().await.as_deref(),
        Some("Error: End point is not within a 2-mile radius of USC")
    );

    form.picker_mut(Endpoint::End)
        .handle(WidgetEvent::MarkerDragEnded(Coordinate::new(34.0230, -118.2860)));
    form.submit().await;
    assert_eq!(
        form.displayed().await.as_deref(),
        Some("Route is within the 2-mile radius of USC")
    );
}
