use crate::map::models::Coordinate;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// University of Southern California, University Park campus.
pub const USC_COORDINATES: Coordinate = Coordinate::new(34.0224, -118.2851);

pub const DEFAULT_RADIUS_MILES: f64 = 2.0;

pub const DEFAULT_AREA_NAME: &str = "USC";

pub const DEFAULT_ZOOM: u8 = 14;
