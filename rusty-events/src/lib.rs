pub mod record;
pub use record::*;

pub mod coord;
pub use coord::*;

/// Latitude first, longitude second. The order map widgets expect.
pub type LatLng = (f64, f64);
