use crate::app_context::AppContext;
use crate::map::models::Coordinate;
use crate::routes::models::Endpoint;
use crate::routes::requests::RouteRequest;
use crate::routes::responses::RouteCreatedResponse;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum RouteRejection {
    #[error("{0} is missing")]
    Missing(Endpoint),
    #[error("{0} is not a valid coordinate")]
    InvalidCoordinate(Endpoint),
    #[error("{endpoint} is not within a {radius_miles}-mile radius of {area}")]
    OutsideArea {
        endpoint: Endpoint,
        radius_miles: f64,
        area: String,
    },
}

pub struct RouteHttpHandler {
    app_context: AppContext,
}

impl RouteHttpHandler {
    pub fn new(app_context: AppContext) -> Self {
        Self { app_context }
    }

    pub fn create(&self, request: RouteRequest) -> Result<RouteCreatedResponse, RouteRejection> {
        let start = self.check(Endpoint::Start, request.start)?;
        let end = self.check(Endpoint::End, request.end)?;
        tracing::debug!(?start, ?end, "Route accepted.");
        let area = &self.app_context.area;
        Ok(RouteCreatedResponse {
            message: format!(
                "Route is within the {}-mile radius of {}",
                area.radius_miles, area.name
            ),
        })
    }

    fn check(
        &self,
        endpoint: Endpoint,
        point: Option<Coordinate>,
    ) -> Result<Coordinate, RouteRejection> {
        let point = point.ok_or(RouteRejection::Missing(endpoint))?;
        if !point.is_valid() {
            return Err(RouteRejection::InvalidCoordinate(endpoint));
        }
        let area = &self.app_context.area;
        if !area.contains(point) {
            return Err(RouteRejection::OutsideArea {
                endpoint,
                radius_miles: area.radius_miles,
                area: area.name.clone(),
            });
        }
        Ok(point)
    }
}
