#![doc = include_str!("../README.md")]

pub mod codec;
mod coord;
pub mod distance;
mod error;
pub mod interleaved;
mod interval;
mod point;

pub use codec::{decode, encode, neighbors, Cell, GeoboxEncoder, GeoboxId};
pub use coord::{BoundingBox, Coordinate, Corner};
pub use distance::{haversine, DistanceMetric, HaversineDistance, EARTH_RADIUS_METERS};
pub use error::{GeoboxError, Result};
pub use interleaved::InterleavedCode;
pub use interval::Interval;
pub use point::{GeoPoint, GeoPointBuilder};
