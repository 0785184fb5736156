use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteCreatedResponse {
    pub message: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteErrorResponse {
    pub error: String,
}

impl RouteErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
