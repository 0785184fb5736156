use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of a route a point belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Start => "Start Point",
            Endpoint::End => "End Point",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("Start point"),
            Endpoint::End => f.write_str("End point"),
        }
    }
}
