//! Great-circle helpers for positions reported by the parser.

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::Float;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance and initial bearing between two positions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircle {
    /// Great-circle distance in meters.
    pub distance: f64,
    /// Initial bearing in degrees, normalized to `[0, 360)`.
    pub bearing: f64,
}

/// Haversine distance and initial bearing from `(lat1, lon1)` to
/// `(lat2, lon2)`, both in decimal degrees.
pub fn great_circle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GreatCircle {
    let (f1, f2) = (lat1.to_radians(), lat2.to_radians());
    let (l1, l2) = (lon1.to_radians(), lon2.to_radians());
    let df = (lat2 - lat1).to_radians();
    let dl = (lon2 - lon1).to_radians();

    let a = (df / 2.0).sin() * (df / 2.0).sin()
        + f1.cos() * f2.cos() * (dl / 2.0).sin() * (dl / 2.0).sin();
    let distance = EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt()) * 1000.0;

    let y = (l2 - l1).sin() * f2.cos();
    let x = f1.cos() * f2.sin() - f1.sin() * f2.cos() * (l2 - l1).cos();
    let mut bearing = y.atan2(x).to_degrees();
    if bearing < 0.0 {
        bearing += 360.0;
    }

    GreatCircle { distance, bearing }
}
