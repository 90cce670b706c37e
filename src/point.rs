//! A coordinate bound to its geobox code.

use std::collections::BTreeMap;

use geo_traits::CoordTrait;
use once_cell::sync::OnceCell;

use crate::codec::constants::DEFAULT_PRECISION;
use crate::codec::encode::{check_precision, encode_unchecked};
use crate::codec::{Cell, GeoboxId};
use crate::coord::{BoundingBox, Coordinate};
use crate::distance::haversine;
use crate::error::{GeoboxError, Result};

/// A point together with the code of the cell containing it.
///
/// Built either from a coordinate, in which case the code and box are derived by encoding, or
/// from a code, in which case the coordinate is the center of the decoded cell. The box
/// diagonal and the neighbor map are computed on first access and cached; a `GeoPoint` can be
/// shared between threads and each is still computed at most once.
#[derive(Debug, Clone)]
pub struct GeoPoint {
    coordinate: Coordinate,
    id: GeoboxId,
    precision: usize,
    bbox: BoundingBox,

    diagonal: OnceCell<f64>,
    neighbors: OnceCell<BTreeMap<GeoboxId, BoundingBox>>,
}

impl GeoPoint {
    /// Encode a coordinate at [`DEFAULT_PRECISION`].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let cell = encode_unchecked(latitude, longitude, DEFAULT_PRECISION);
        Self::from_parts(Coordinate::new(latitude, longitude), cell, DEFAULT_PRECISION)
    }

    /// Encode a coordinate, at `precision` symbols if given.
    pub fn from_coordinate(coordinate: Coordinate, precision: Option<usize>) -> Result<Self> {
        let precision = precision.unwrap_or(DEFAULT_PRECISION);
        let cell = crate::codec::encode(coordinate.latitude, coordinate.longitude, precision)?;
        Ok(Self::from_parts(coordinate, cell, precision))
    }

    /// Encode any coordinate whose x is longitude and y is latitude.
    pub fn from_coord(
        coord: &impl CoordTrait<T = f64>,
        precision: Option<usize>,
    ) -> Result<Self> {
        Self::from_coordinate(Coordinate::new(coord.y(), coord.x()), precision)
    }

    /// Decode a code. The point sits at the cell center.
    ///
    /// `precision` overrides the reported precision; by default it is the code length. The
    /// cell itself, and its neighbors, always follow the code.
    pub fn from_code(code: &str, precision: Option<usize>) -> Result<Self> {
        let id: GeoboxId = code.parse()?;
        Self::from_id(id, precision)
    }

    /// Like [`from_code`](Self::from_code), for an already parsed code.
    pub fn from_id(id: GeoboxId, precision: Option<usize>) -> Result<Self> {
        let precision = match precision {
            Some(p) => {
                check_precision(p)?;
                p
            }
            None => id.precision(),
        };
        let cell = id.decode();
        Ok(Self::from_parts(cell.center(), cell, precision))
    }

    /// Start building a point from optional parts.
    pub fn builder() -> GeoPointBuilder {
        GeoPointBuilder::default()
    }

    fn from_parts(coordinate: Coordinate, cell: Cell, precision: usize) -> Self {
        let bbox = *cell.bbox();
        Self {
            coordinate,
            id: cell.into_id(),
            precision,
            bbox,
            diagonal: OnceCell::new(),
            neighbors: OnceCell::new(),
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }

    /// The input coordinate, or the cell center for a point built from a code.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// `(latitude, longitude)`
    pub fn lat_lng(&self) -> (f64, f64) {
        self.coordinate.lat_lng()
    }

    /// The code of the cell containing this point.
    pub fn code(&self) -> &GeoboxId {
        &self.id
    }

    /// Reported precision: the code length unless overridden.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// The four corners of this point's cell.
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Haversine length of the cell diagonal from NE to SW, in meters.
    pub fn diagonal_meters(&self) -> f64 {
        *self
            .diagonal
            .get_or_init(|| haversine(&self.bbox.ne(), &self.bbox.sw()))
    }

    /// The surrounding cells of equal precision, keyed by code.
    pub fn neighbors(&self) -> &BTreeMap<GeoboxId, BoundingBox> {
        self.neighbors.get_or_init(|| {
            self.id
                .neighbors()
                .into_iter()
                .map(|n| {
                    let bbox = *n.cell.bbox();
                    (n.cell.into_id(), bbox)
                })
                .collect()
        })
    }

    /// Haversine distance to another point, in meters.
    pub fn distance_from(&self, other: &GeoPoint) -> f64 {
        haversine(&self.coordinate, &other.coordinate)
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
            && self.id == other.id
            && self.precision == other.precision
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GeoPoint {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("GeoPoint", 3)?;
        state.serialize_field("geobox_id", &self.id)?;
        state.serialize_field("latitude", &self.coordinate.latitude)?;
        state.serialize_field("longitude", &self.coordinate.longitude)?;
        state.end()
    }
}

/// Collects the inputs for a [`GeoPoint`] and checks they make sense together.
///
/// Exactly one of a full coordinate or a code must be set.
#[derive(Debug, Clone, Default)]
pub struct GeoPointBuilder {
    latitude: Option<f64>,
    longitude: Option<f64>,
    code: Option<String>,
    precision: Option<usize>,
}

impl GeoPointBuilder {
    /// Set the latitude, in degrees.
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Set the longitude, in degrees.
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Set latitude and longitude together.
    pub fn coordinate(self, coordinate: Coordinate) -> Self {
        self.latitude(coordinate.latitude)
            .longitude(coordinate.longitude)
    }

    /// Build from a code instead of a coordinate.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Number of symbols to encode at, or the precision to report for a code.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Check the inputs and build the point.
    pub fn build(self) -> Result<GeoPoint> {
        let has_coordinate_part = self.latitude.is_some() || self.longitude.is_some();
        match (self.code, self.latitude, self.longitude) {
            (Some(_), _, _) if has_coordinate_part => Err(GeoboxError::InvalidArgument(
                "a GeoPoint takes either a code or a coordinate, not both".to_string(),
            )),
            (Some(code), None, None) => GeoPoint::from_code(&code, self.precision),
            (None, Some(latitude), Some(longitude)) => GeoPoint::from_coordinate(
                Coordinate::new(latitude, longitude),
                self.precision,
            ),
            (None, Some(_), None) | (None, None, Some(_)) => Err(GeoboxError::InvalidArgument(
                "latitude and longitude must be given together".to_string(),
            )),
            _ => Err(GeoboxError::InvalidArgument(
                "either a code or a latitude/longitude must be provided to create a GeoPoint"
                    .to_string(),
            )),
        }
    }
}
