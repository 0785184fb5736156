use serde::{Deserialize, Serialize};

/// A point on the Earth's surface, in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A circle on the map that routes have to stay inside of.
#[derive(Clone, Debug)]
pub struct ServiceArea {
    pub name: String,
    pub center: Coordinate,
    pub radius_miles: f64,
}

impl ServiceArea {
    pub fn contains(&self, point: Coordinate) -> bool {
        super::distance_miles(point, self.center) <= self.radius_miles
    }
}
