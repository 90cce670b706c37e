use geo_traits::CoordTrait;
use log::debug;

use crate::codec::constants::DEFAULT_PRECISION;
use crate::codec::{Cell, GeoboxId, Hemisphere};
use crate::coord::{BoundingBox, Coordinate};
use crate::error::{GeoboxError, Result};
use crate::interval::Interval;

/// Encodes coordinates at a fixed precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoboxEncoder {
    precision: usize,
}

impl GeoboxEncoder {
    /// Create a new encoder with the default precision of 18 symbols.
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Create a new encoder emitting `precision` symbols, hemisphere included.
    ///
    /// Fails with [`GeoboxError::InvalidArgument`] when `precision` is zero.
    pub fn new_with_precision(precision: usize) -> Result<Self> {
        check_precision(precision)?;
        Ok(Self { precision })
    }

    /// Number of symbols this encoder emits.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Encode a latitude/longitude pair into the cell containing it.
    pub fn encode(&self, latitude: f64, longitude: f64) -> Cell {
        encode_unchecked(latitude, longitude, self.precision)
    }

    /// Encode any coordinate whose x is longitude and y is latitude.
    pub fn encode_coord(&self, coord: &impl CoordTrait<T = f64>) -> Cell {
        self.encode(coord.y(), coord.x())
    }
}

impl Default for GeoboxEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `(latitude, longitude)` into a code of `precision` symbols.
///
/// The returned cell carries both the code and its bounding box. Coordinates are expected to
/// be within `[-90, 90]` and `[-180, 180]`; anything else is bisected as-is and yields a
/// well-formed code for a cell that does not contain the input.
///
/// ```
/// let cell = geobox::encode(41.87643118161227, 12.481563961993402, 18).unwrap();
/// assert_eq!(cell.id().to_string(), "eagacagacctggaaaga");
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<Cell> {
    check_precision(precision)?;
    Ok(encode_unchecked(latitude, longitude, precision))
}

pub(crate) fn check_precision(precision: usize) -> Result<()> {
    if precision < 1 {
        return Err(GeoboxError::InvalidArgument(
            "precision must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Caller guarantees `precision >= 1`.
pub(crate) fn encode_unchecked(latitude: f64, longitude: f64, precision: usize) -> Cell {
    if !Coordinate::new(latitude, longitude).is_in_range() {
        debug!(
            "encoding out-of-range coordinate ({}, {}) best-effort",
            latitude, longitude
        );
    }

    let hemisphere = Hemisphere::from_longitude(longitude);
    let mut id = GeoboxId::with_hemisphere(hemisphere);
    let mut lon = hemisphere.lon_interval();
    let mut lat = Interval::new(-90.0, 90.0);

    for _ in 1..precision {
        let (lon_bit, lon_half) = lon.bisect(longitude);
        let (lat_bit, lat_half) = lat.bisect(latitude);
        lon = lon_half;
        lat = lat_half;
        id.push_value(((lon_bit as u8) << 1) | lat_bit as u8);
    }

    Cell::new(id, BoundingBox::from_intervals(lat, lon))
}
