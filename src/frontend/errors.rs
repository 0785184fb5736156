use reqwest::StatusCode;
use std::error::Error as _;
use thiserror::Error;

/// Ways a route submission can fail. The `Display` text is what the user gets to see.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The service said no and explained why.
    #[error("{error}")]
    Rejected { status: StatusCode, error: String },

    /// The service said no without a readable `{ "error": ... }` body.
    #[error("routing service responded with {status}")]
    Unstructured { status: StatusCode },

    #[error("could not reach the routing service")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from the routing service")]
    MalformedResponse(#[source] reqwest::Error),
}

impl RoutingError {
    /// The user-facing text followed by every underlying cause, for the logs.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}
