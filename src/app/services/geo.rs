//! Great-circle distance over spherical-earth coordinates
//!
//! This module defines the coordinate capability shared by gazetteer records
//! and plain latitude/longitude pairs, and the distance function used by the
//! nearest-place search.

use crate::constants::EARTH_RADIUS_METERS;
use serde::{Deserialize, Serialize};

/// Capability of exposing a WGS84-like position in decimal degrees.
///
/// No bounds validation is performed; any IEEE-754 double is accepted.
pub trait Coordinate {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// A plain latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinate for LatLng {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Great-circle distance in meters via the spherical law of cosines.
///
/// Bit-identical coordinates short-circuit to exactly `0.0` before any
/// trigonometry; rounding at the arccosine domain edge would otherwise
/// surface as NaN for near-identical points. The cosine sum is clamped to
/// `[-1, 1]` for the same reason at the near-antipodal edge.
pub fn great_circle_distance(a: &impl Coordinate, b: &impl Coordinate) -> f64 {
    if a.latitude() == b.latitude() && a.longitude() == b.longitude() {
        return 0.0;
    }

    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lon = (a.longitude() - b.longitude()).to_radians();

    let cosine_sum = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * delta_lon.cos();
    cosine_sum.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_METERS
}
