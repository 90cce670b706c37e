//! Great-circle distance between coordinates.
//!
//! [`HaversineDistance`] is the metric the rest of the crate uses. With the `use-geo_0_31`
//! feature, [`GeodesicDistance`] offers an ellipsoidal alternative backed by the `geo` crate.

use crate::coord::Coordinate;

/// Earth radius, in meters, used for cell diagonals and point distances.
pub const EARTH_RADIUS_METERS: f64 = 6_378_100.0;

/// A way of measuring the distance in meters between two coordinates.
pub trait DistanceMetric {
    /// Distance from `a` to `b`, in meters.
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64;
}

/// Haversine distance metric.
///
/// Treats the earth as a sphere. The input coordinates are in degrees and the output distance
/// is in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaversineDistance {
    /// Earth's radius in meters
    pub earth_radius: f64,
}

impl Default for HaversineDistance {
    fn default() -> Self {
        Self {
            earth_radius: EARTH_RADIUS_METERS,
        }
    }
}

impl HaversineDistance {
    /// Create a new Haversine distance metric with custom Earth radius.
    pub fn with_radius(earth_radius: f64) -> Self {
        Self { earth_radius }
    }
}

impl DistanceMetric for HaversineDistance {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        let (lat1, lon1) = (a.latitude.to_radians(), a.longitude.to_radians());
        let (lat2, lon2) = (b.latitude.to_radians(), b.longitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = lon2 - lon1;

        let h = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().min(1.0).asin();
        self.earth_radius * c
    }
}

/// Haversine distance in meters using [`EARTH_RADIUS_METERS`].
///
/// ```
/// use geobox::{haversine, Coordinate};
///
/// let d = haversine(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0));
/// assert!((d - 111_319.0).abs() < 1.0);
/// ```
pub fn haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    HaversineDistance::default().distance(a, b)
}

/// Spheroid distance metric (using Geodesic/Karney's formula).
///
/// This calculates the shortest distance between two points on the surface of the WGS84
/// ellipsoid. The input coordinates are in degrees and the output distance is in meters.
#[cfg(feature = "use-geo_0_31")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicDistance;

#[cfg(feature = "use-geo_0_31")]
impl DistanceMetric for GeodesicDistance {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        use geo_0_31::algorithm::{Distance, Geodesic};
        use geo_0_31::Point;

        Geodesic.distance(Point::from(*a), Point::from(*b))
    }
}
