use crate::frontend::errors::RoutingError;
use crate::routes::requests::RouteRequest;
use crate::routes::responses::{RouteCreatedResponse, RouteErrorResponse};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Something that can turn a start/end pair into a route verdict.
#[async_trait]
pub trait RoutingService: Send + Sync {
    async fn create_route(
        &self,
        request: &RouteRequest,
    ) -> Result<RouteCreatedResponse, RoutingError>;
}

/// Talks to `POST /api/route` over HTTP. No retries and no timeout.
#[derive(Clone, Debug)]
pub struct HttpRoutingClient {
    inner: Client,
    endpoint: Url,
}

impl HttpRoutingClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            inner: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RoutingService for HttpRoutingClient {
    async fn create_route(
        &self,
        request: &RouteRequest,
    ) -> Result<RouteCreatedResponse, RoutingError> {
        let response = self
            .inner
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<RouteCreatedResponse>()
                .await
                .map_err(RoutingError::MalformedResponse);
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<RouteErrorResponse>(&body) {
            Ok(RouteErrorResponse { error }) => Err(RoutingError::Rejected { status, error }),
            Err(_) => Err(RoutingError::Unstructured { status }),
        }
    }
}
