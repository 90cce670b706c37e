//! Encoding coordinates into geobox codes and back.
//!
//! A code is built by bisecting a latitude interval and a longitude interval in lockstep. The
//! first symbol picks the longitude hemisphere (`w` or `e`); each further symbol records which
//! half of each interval the point fell in, so every additional symbol quarters the cell.

#![warn(missing_docs)]

pub mod constants;
mod decode;
pub(crate) mod encode;
mod id;
mod neighbors;

pub use constants::DEFAULT_PRECISION;
pub use decode::decode;
pub use encode::{encode, GeoboxEncoder};
pub use id::{GeoboxId, Hemisphere};
pub use neighbors::{neighbor_spacing, neighbors, Direction, Neighbor};

use crate::coord::{BoundingBox, Coordinate};

/// A code together with the box it names.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: GeoboxId,
    bbox: BoundingBox,
}

impl Cell {
    pub(crate) fn new(id: GeoboxId, bbox: BoundingBox) -> Self {
        Self { id, bbox }
    }

    /// The code of this cell.
    pub fn id(&self) -> &GeoboxId {
        &self.id
    }

    /// Consume the cell, keeping only its code.
    pub fn into_id(self) -> GeoboxId {
        self.id
    }

    /// The bounding box of this cell.
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// South-west corner.
    pub fn sw(&self) -> Coordinate {
        self.bbox.sw()
    }

    /// North-east corner.
    pub fn ne(&self) -> Coordinate {
        self.bbox.ne()
    }

    /// Midpoint of the cell's latitude and longitude ranges.
    pub fn center(&self) -> Coordinate {
        self.bbox.center()
    }

    /// Number of symbols in the code.
    pub fn precision(&self) -> usize {
        self.id.precision()
    }
}

#[cfg(test)]
mod test;
