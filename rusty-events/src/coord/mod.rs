mod point;
pub use point::*;

use geo_types::Point;
use thiserror::Error;

use crate::LatLng;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("not a WKT point: {0}")]
    Wkt(String),
    #[error("coordinate is not finite: ({0}, {1})")]
    NotFinite(f64, f64),
}

/// Maps a (lat, lng) tuple onto the x = longitude, y = latitude convention
/// used by `geo_types`.
pub fn lat_lng_to_point((lat, lng): LatLng) -> Point<f64> {
    Point::new(lng, lat)
}
