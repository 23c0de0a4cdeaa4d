use geo_types::Point;
use wkt::TryFromWkt;

use crate::LatLng;

use super::CoordinateError;

const PREFIX: &str = "Point(";

/// Converts a `Point(<lon> <lat>)` geometry into `(lat, lon)`.
///
/// Performs no validation: the first `Point(` and the first `)` are dropped
/// and the first two whitespace separated tokens are read as numbers. Any
/// token that is missing or not a number comes back as `NaN`. Use
/// [`parse_point`] when malformed input should be an error.
pub fn point_string_to_lat_lng_tuple(point: &str) -> LatLng {
    let cleaned = point.replacen(PREFIX, "", 1).replacen(')', "", 1);

    let mut numbers = cleaned
        .split_whitespace()
        .map(|token| token.parse::<f64>().unwrap_or(f64::NAN));
    let x = numbers.next().unwrap_or(f64::NAN);
    let y = numbers.next().unwrap_or(f64::NAN);

    (y, x)
}

/// Strict version of [`point_string_to_lat_lng_tuple`]. The geometry has to
/// be a WKT point (keyword in any case) with finite coordinates.
pub fn parse_point(point: &str) -> Result<LatLng, CoordinateError> {
    let point = <Point<f64> as TryFromWkt<f64>>::try_from_wkt_str(point.trim())
        .map_err(|e| CoordinateError::Wkt(e.to_string()))?;

    let (lat, lng) = (point.y(), point.x());
    if !(lat.is_finite() && lng.is_finite()) {
        return Err(CoordinateError::NotFinite(lat, lng));
    }

    Ok((lat, lng))
}
