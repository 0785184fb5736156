use crate::frontend::errors::RoutingError;
use crate::routes::responses::RouteCreatedResponse;
use std::fmt;

/// The single line of text the form shows after a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteOutcome {
    Message(String),
    Error(String),
}

impl RouteOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, RouteOutcome::Error(_))
    }
}

impl From<Result<RouteCreatedResponse, RoutingError>> for RouteOutcome {
    fn from(result: Result<RouteCreatedResponse, RoutingError>) -> Self {
        match result {
            Ok(response) => RouteOutcome::Message(response.message),
            Err(err) => RouteOutcome::Error(err.to_string()),
        }
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::Message(message) => f.write_str(message),
            RouteOutcome::Error(error) => write!(f, "Error: {error}"),
        }
    }
}
