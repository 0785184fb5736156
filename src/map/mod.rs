use consts::EARTH_RADIUS_MILES;
use models::Coordinate;

pub mod consts;
pub mod models;

/// Great-circle distance between two points (haversine formula).
pub fn distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_MILES * c
}
