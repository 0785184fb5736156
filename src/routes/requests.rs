use crate::map::models::Coordinate;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/route`. Either point may be `null` if the user never picked it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
}
