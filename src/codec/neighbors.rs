use log::{debug, trace};

use crate::codec::encode::encode_unchecked;
use crate::codec::{Cell, GeoboxId};
use crate::coord::Coordinate;
use crate::error::Result;

/// Compass direction from a cell to one of its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North
    N,
    /// North-east
    NE,
    /// East
    E,
    /// South-east
    SE,
    /// South
    S,
    /// South-west
    SW,
    /// West
    W,
    /// North-west
    NW,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit step as `(latitude, longitude)`.
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::N => (1, 0),
            Direction::NE => (1, 1),
            Direction::E => (0, 1),
            Direction::SE => (-1, 1),
            Direction::S => (-1, 0),
            Direction::SW => (-1, -1),
            Direction::W => (0, -1),
            Direction::NW => (1, -1),
        }
    }
}

/// A cell adjacent to another, and the direction it lies in.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Where the neighbor lies relative to the original cell.
    pub direction: Direction,
    /// The neighboring cell.
    pub cell: Cell,
}

/// Angular step between adjacent cell centers at `precision`, in degrees.
///
/// The same step is used for latitude and longitude, without compensating for longitude
/// degrees shrinking away from the equator.
pub fn neighbor_spacing(precision: usize) -> f64 {
    180.0 / 2f64.powi(precision.saturating_sub(1) as i32)
}

/// The cells of equal precision surrounding `code`.
///
/// Each candidate is found by stepping [`neighbor_spacing`] away from the cell center and
/// re-encoding. Directions landing in the same cell collapse into one entry, which can happen
/// at low precision and near the poles. Nothing wraps around the antimeridian or over the
/// poles: a candidate outside the valid range is encoded as-is.
///
/// ```
/// let neighbors = geobox::neighbors("eagacagacctggaaaga").unwrap();
/// assert_eq!(neighbors.len(), 8);
/// ```
pub fn neighbors(code: &str) -> Result<Vec<Neighbor>> {
    let id: GeoboxId = code.parse()?;
    Ok(neighbors_of(&id))
}

pub(crate) fn neighbors_of(id: &GeoboxId) -> Vec<Neighbor> {
    let precision = id.precision();
    let spacing = neighbor_spacing(precision);
    let center = id.decode().center();
    trace!("deriving neighbors of {} with spacing {}", id, spacing);

    let mut result: Vec<Neighbor> = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        let (d_lat, d_lon) = direction.offset();
        let candidate = Coordinate::new(
            center.latitude + f64::from(d_lat) * spacing,
            center.longitude + f64::from(d_lon) * spacing,
        );
        if !candidate.is_in_range() {
            debug!(
                "{:?} neighbor of {} falls outside the valid range at {}",
                direction, id, candidate
            );
        }

        let cell = encode_unchecked(candidate.latitude, candidate.longitude, precision);
        if result.iter().any(|n| n.cell.id() == cell.id()) {
            continue;
        }
        result.push(Neighbor { direction, cell });
    }
    result
}
