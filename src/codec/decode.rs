use crate::codec::{Cell, GeoboxId};
use crate::coord::BoundingBox;
use crate::error::Result;
use crate::interval::Interval;

/// Decode a code string into the cell it names.
///
/// Fails with [`GeoboxError::InvalidCode`](crate::GeoboxError::InvalidCode) when the code is
/// empty, starts with anything but `w` or `e`, or contains a symbol outside `g a t c`.
///
/// ```
/// let cell = geobox::decode("eaaggaggaggaagaaag").unwrap();
/// assert!(cell.bbox().contains(&geobox::Coordinate::new(51.48, 0.0)));
/// ```
pub fn decode(code: &str) -> Result<Cell> {
    let id: GeoboxId = code.parse()?;
    Ok(decode_id(&id))
}

pub(crate) fn decode_id(id: &GeoboxId) -> Cell {
    let mut lon = id.hemisphere().lon_interval();
    let mut lat = Interval::new(-90.0, 90.0);

    for value in id.values() {
        lon = lon.half(value & 2 != 0);
        lat = lat.half(value & 1 != 0);
    }

    Cell::new(id.clone(), BoundingBox::from_intervals(lat, lon))
}
