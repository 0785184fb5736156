use crate::map::consts::{DEFAULT_AREA_NAME, DEFAULT_RADIUS_MILES, USC_COORDINATES};
use crate::map::models::{Coordinate, ServiceArea};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "walk-safe", about = "Pick a start and an end point, check the route.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the routing service.
    Serve(ServeArgs),
    /// Fill in the route form headlessly and submit it.
    Plan(PlanArgs),
}

#[derive(Debug, clap::Args)]
pub struct ServeArgs {
    #[arg(long, env = "WALK_SAFE_LISTEN_ADDRESS")]
    #[arg(default_value = "127.0.0.1:5000")]
    pub listen_address: SocketAddr,
    #[arg(long, value_parser = parse_latitude, allow_negative_numbers = true)]
    #[arg(default_value_t = USC_COORDINATES.lat)]
    pub center_lat: f64,
    #[arg(long, value_parser = parse_longitude, allow_negative_numbers = true)]
    #[arg(default_value_t = USC_COORDINATES.lng)]
    pub center_lng: f64,
    #[arg(long, value_parser = parse_radius, allow_negative_numbers = true)]
    #[arg(default_value_t = DEFAULT_RADIUS_MILES)]
    pub radius_miles: f64,
    #[arg(long)]
    #[arg(default_value = DEFAULT_AREA_NAME)]
    pub area_name: String,
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
}

impl ServeArgs {
    pub fn service_area(&self) -> ServiceArea {
        ServiceArea {
            name: self.area_name.clone(),
            center: Coordinate::new(self.center_lat, self.center_lng),
            radius_miles: self.radius_miles,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct PlanArgs {
    #[arg(long, env = "WALK_SAFE_ROUTING_URL")]
    #[arg(default_value = "http://127.0.0.1:5000/api/route")]
    pub routing_url: Url,
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    #[arg(value_parser = parse_secret)]
    pub maps_api_key: Option<SecretString>,
    /// Start point as `LAT,LNG`.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub start: Option<Coordinate>,
    /// End point as `LAT,LNG`.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub end: Option<Coordinate>,
}

pub fn parse_coordinate(raw: &str) -> Result<Coordinate, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `LAT,LNG`, got `{raw}`"))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad latitude `{lat}`: {err}"))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad longitude `{lng}`: {err}"))?;
    let coordinate = Coordinate::new(lat, lng);
    if !coordinate.is_valid() {
        return Err(format!("`{raw}` is outside of [-90, 90] x [-180, 180]"));
    }
    Ok(coordinate)
}

pub fn parse_latitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, 90.0)
}

pub fn parse_longitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, 180.0)
}

fn parse_degrees(raw: &str, bound: f64) -> Result<f64, String> {
    let degrees = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad angle `{raw}`: {err}"))?;
    if !(-bound..=bound).contains(&degrees) {
        return Err(format!("`{raw}` is outside of [-{bound}, {bound}]"));
    }
    Ok(degrees)
}

pub fn parse_radius(raw: &str) -> Result<f64, String> {
    let radius = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad radius `{raw}`: {err}"))?;
    if !(radius.is_finite() && radius > 0.0) {
        return Err(format!("radius must be a positive number of miles, got `{raw}`"));
    }
    Ok(radius)
}

fn parse_secret(raw: &str) -> Result<SecretString, String> {
    Ok(SecretString::from(raw))
}
