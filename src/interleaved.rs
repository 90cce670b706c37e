//! Integer form of the bisection code.
//!
//! Instead of a hemisphere symbol and an alphabet, each bisection step contributes two bits to
//! an unsigned integer: the longitude bit, then the latitude bit, most significant pair first.
//! Longitude is bisected over the whole `[-180, 180]` range from the first step, so the two
//! forms do not map onto each other symbol for symbol.

use crate::coord::{BoundingBox, Coordinate};
use crate::error::{GeoboxError, Result};
use crate::interval::Interval;

/// Bisection steps used when the caller does not pick a depth.
pub const DEFAULT_DEPTH: u8 = 32;

/// Most steps that fit in 64 bits.
pub const MAX_DEPTH: u8 = 32;

/// A cell code packed into `2 * depth` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterleavedCode {
    bits: u64,
    depth: u8,
}

impl InterleavedCode {
    /// Encode at [`DEFAULT_DEPTH`].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        encode_bits(latitude, longitude, DEFAULT_DEPTH)
    }

    /// Encode with `depth` bisection steps, `1..=32`.
    pub fn encode(latitude: f64, longitude: f64, depth: u8) -> Result<Self> {
        check_depth(depth)?;
        Ok(encode_bits(latitude, longitude, depth))
    }

    /// Wrap previously generated bits. Bits above `2 * depth` must be clear.
    pub fn from_bits(bits: u64, depth: u8) -> Result<Self> {
        check_depth(depth)?;
        if depth < MAX_DEPTH && bits >> (2 * depth as u32) != 0 {
            return Err(GeoboxError::InvalidArgument(format!(
                "code {:#x} has bits set above depth {}",
                bits, depth
            )));
        }
        Ok(Self { bits, depth })
    }

    /// Reinterpret a signed code, as produced by [`as_signed`](Self::as_signed).
    pub fn from_signed(code: i64, depth: u8) -> Result<Self> {
        Self::from_bits(code as u64, depth)
    }

    /// The unsigned code. Codes of equal depth sort in Z-order.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Number of bisection steps.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// The same bits read as a two's-complement integer.
    ///
    /// At full depth, every cell east of the prime meridian has its top bit set and so comes
    /// out negative: signed codes do not sort in cell order. Compare [`bits`](Self::bits)
    /// when ordering matters.
    pub fn as_signed(&self) -> i64 {
        self.bits as i64
    }

    /// The cell this code names.
    pub fn decode(&self) -> BoundingBox {
        let mut lon = Interval::new(-180.0, 180.0);
        let mut lat = Interval::new(-90.0, 90.0);
        for step in 0..self.depth {
            let lon_pos = bit_position(self.depth, step);
            lon = lon.half((self.bits >> lon_pos) & 1 == 1);
            lat = lat.half((self.bits >> (lon_pos - 1)) & 1 == 1);
        }
        BoundingBox::from_intervals(lat, lon)
    }

    /// Center of the decoded cell.
    pub fn center(&self) -> Coordinate {
        self.decode().center()
    }
}

fn check_depth(depth: u8) -> Result<()> {
    if depth == 0 || depth > MAX_DEPTH {
        return Err(GeoboxError::InvalidArgument(format!(
            "depth must be within 1..={}, got {}",
            MAX_DEPTH, depth
        )));
    }
    Ok(())
}

/// Position of the longitude bit for bisection `step`; the latitude bit sits just below it.
#[inline]
fn bit_position(depth: u8, step: u8) -> u32 {
    2 * (depth - step) as u32 - 1
}

fn encode_bits(latitude: f64, longitude: f64, depth: u8) -> InterleavedCode {
    let mut lon = Interval::new(-180.0, 180.0);
    let mut lat = Interval::new(-90.0, 90.0);
    let mut bits = 0u64;

    for step in 0..depth {
        let (lon_bit, lon_half) = lon.bisect(longitude);
        let (lat_bit, lat_half) = lat.bisect(latitude);
        lon = lon_half;
        lat = lat_half;

        let pos = bit_position(depth, step);
        bits |= (lon_bit as u64) << pos;
        bits |= (lat_bit as u64) << (pos - 1);
    }

    InterleavedCode { bits, depth }
}
