use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tinyvec::TinyVec;

use crate::codec::constants::{symbol_value, ALPHABET, EAST, INLINE_SYMBOLS, WEST};
use crate::codec::{decode, neighbors, Cell, Neighbor};
use crate::error::{GeoboxError, Result};
use crate::interval::Interval;

/// The half of the globe a code starts in, named by its first symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    /// Longitude in `[-180, 0)`, symbol `w`.
    West,
    /// Longitude in `[0, 180]`, symbol `e`.
    East,
}

impl Hemisphere {
    /// Zero belongs to the eastern hemisphere.
    pub fn from_longitude(longitude: f64) -> Self {
        if longitude < 0.0 {
            Self::West
        } else {
            Self::East
        }
    }

    /// Parse a leading `w` or `e`.
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            WEST => Some(Self::West),
            EAST => Some(Self::East),
            _ => None,
        }
    }

    /// The leading symbol of codes in this hemisphere.
    pub fn symbol(&self) -> u8 {
        match self {
            Self::West => WEST,
            Self::East => EAST,
        }
    }

    /// The longitude interval bisection starts from.
    pub fn lon_interval(&self) -> Interval {
        match self {
            Self::West => Interval::new(-180.0, 0.0),
            Self::East => Interval::new(0.0, 180.0),
        }
    }
}

/// A validated geobox code: a hemisphere symbol followed by zero or more alphabet symbols.
///
/// Codes of typical precision are stored inline. Ordering, equality and hashing follow the
/// code string, so sorting codes groups cells sharing a prefix together.
#[derive(Clone)]
pub struct GeoboxId {
    hemisphere: Hemisphere,
    /// Every symbol, the hemisphere symbol included.
    symbols: TinyVec<[u8; INLINE_SYMBOLS]>,
}

impl GeoboxId {
    pub(crate) fn with_hemisphere(hemisphere: Hemisphere) -> Self {
        let mut symbols = TinyVec::new();
        symbols.push(hemisphere.symbol());
        Self {
            hemisphere,
            symbols,
        }
    }

    /// Append the symbol for a 2-bit value.
    #[inline]
    pub(crate) fn push_value(&mut self, value: u8) {
        self.symbols.push(ALPHABET[(value & 3) as usize]);
    }

    /// Number of symbols, hemisphere included. Always at least 1.
    pub fn precision(&self) -> usize {
        self.symbols.len()
    }

    /// The hemisphere named by the first symbol.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// The raw ASCII symbols.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// The 2-bit values of the symbols after the hemisphere.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.symbols[1..]
            .iter()
            .map(|&s| symbol_value(s).unwrap_or_default())
    }

    /// Decode into the cell this code names.
    pub fn decode(&self) -> Cell {
        decode::decode_id(self)
    }

    /// The up to eight cells of equal precision surrounding this one.
    pub fn neighbors(&self) -> Vec<Neighbor> {
        neighbors::neighbors_of(self)
    }

    /// The code shortened to `precision` symbols, or `None` if that is zero or not shorter.
    pub fn truncate(&self, precision: usize) -> Option<GeoboxId> {
        if precision == 0 || precision >= self.precision() {
            return None;
        }
        let mut symbols = TinyVec::new();
        symbols.extend_from_slice(&self.symbols[..precision]);
        Some(Self {
            hemisphere: self.hemisphere,
            symbols,
        })
    }

    /// The enclosing cell one level up, or `None` for a bare hemisphere.
    pub fn parent(&self) -> Option<GeoboxId> {
        self.truncate(self.precision() - 1)
    }

    /// Whether `prefix` is a prefix of this code, i.e. whether its cell contains this one.
    pub fn has_prefix(&self, prefix: &GeoboxId) -> bool {
        self.symbols.starts_with(&prefix.symbols)
    }

    /// Whether this cell contains the cell named by `other`.
    pub fn contains(&self, other: &GeoboxId) -> bool {
        other.has_prefix(self)
    }
}

impl FromStr for GeoboxId {
    type Err = GeoboxError;

    fn from_str(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        let Some(&first) = bytes.first() else {
            return Err(GeoboxError::invalid_code(code, "empty code"));
        };
        let Some(hemisphere) = Hemisphere::from_symbol(first) else {
            return Err(GeoboxError::invalid_code(
                code,
                format!("unknown hemisphere prefix {:?}", first as char),
            ));
        };
        let unknown = code
            .char_indices()
            .skip(1)
            .find(|&(_, c)| !c.is_ascii() || symbol_value(c as u8).is_none());
        if let Some((pos, bad)) = unknown {
            return Err(GeoboxError::invalid_code(
                code,
                format!("symbol {:?} at offset {} is not in the alphabet", bad, pos),
            ));
        }

        let mut symbols = TinyVec::new();
        symbols.extend_from_slice(bytes);
        Ok(Self {
            hemisphere,
            symbols,
        })
    }
}

impl TryFrom<&str> for GeoboxId {
    type Error = GeoboxError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for GeoboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in self.symbols.iter() {
            fmt::Write::write_char(f, symbol as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GeoboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoboxId(\"{}\")", self)
    }
}

impl PartialEq for GeoboxId {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for GeoboxId {}

impl PartialEq<str> for GeoboxId {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for GeoboxId {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for GeoboxId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoboxId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for GeoboxId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GeoboxId {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GeoboxId {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: GeoboxId = "eagacagacctggaaaga".parse().unwrap();
        assert_eq!(id.precision(), 18);
        assert_eq!(id.hemisphere(), Hemisphere::East);
        assert_eq!(id.to_string(), "eagacagacctggaaaga");
        assert_eq!(id, "eagacagacctggaaaga");
        assert_eq!(format!("{:?}", id), "GeoboxId(\"eagacagacctggaaaga\")");
        assert_eq!(id.values().take(4).collect::<Vec<_>>(), vec![1, 0, 1, 3]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for code in ["", "x", "Eag", "eagx", "e ag", "wgatcG"] {
            let err = code.parse::<GeoboxId>().unwrap_err();
            assert!(
                matches!(err, GeoboxError::InvalidCode { .. }),
                "{code:?} gave {err:?}"
            );
        }
        // Hemisphere symbols are not cell symbols.
        assert!("eew".parse::<GeoboxId>().is_err());
    }

    #[test]
    fn test_bare_hemisphere_is_valid() {
        let west: GeoboxId = "w".parse().unwrap();
        assert_eq!(west.precision(), 1);
        assert_eq!(west.hemisphere(), Hemisphere::West);
        assert!(west.parent().is_none());
    }

    #[test]
    fn test_prefix_relations() {
        let id: GeoboxId = "eaagggatcgcacaataa".parse().unwrap();
        let parent = id.parent().unwrap();
        assert_eq!(parent, "eaagggatcgcacaata");
        assert!(id.has_prefix(&parent));
        assert!(parent.contains(&id));
        assert!(!id.contains(&parent));

        let region = id.truncate(5).unwrap();
        assert_eq!(region, "eaagg");
        assert!(region.contains(&id));
        assert!(id.truncate(18).is_none());
        assert!(id.truncate(0).is_none());
    }

    #[test]
    fn test_long_codes_spill_to_heap() {
        let code = format!("e{}", "tc".repeat(20));
        let id: GeoboxId = code.parse().unwrap();
        assert_eq!(id.precision(), 41);
        assert_eq!(id.to_string(), code);
    }

    #[test]
    fn test_ordering_follows_string() {
        let mut ids: Vec<GeoboxId> = ["wg", "ec", "ea", "e", "eag"]
            .into_iter()
            .map(|c| c.parse().unwrap())
            .collect();
        ids.sort();
        let sorted: Vec<String> = ids.iter().map(|i| i.to_string()).collect();
        assert_eq!(sorted, vec!["e", "ea", "eag", "ec", "wg"]);
    }

    #[test]
    fn test_hemisphere_survives_truncation() {
        let west = crate::codec::encode(-10.0, -10.0, 6).unwrap().into_id();
        assert_eq!(west.hemisphere(), Hemisphere::West);
        assert_eq!(west.parent().unwrap().hemisphere(), Hemisphere::West);
        assert_eq!(west.truncate(1).unwrap(), "w");
        assert_eq!(west.truncate(1).unwrap().hemisphere(), Hemisphere::West);

        let east: GeoboxId = "ecct".parse().unwrap();
        assert_eq!(east.truncate(2).unwrap().hemisphere(), Hemisphere::East);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let id: GeoboxId = "eaaggaggaggaagaaag".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"eaaggaggaggaagaaag\"");

        let back: GeoboxId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert_eq!(back.hemisphere(), Hemisphere::East);

        for bad in ["\"eax\"", "\"\"", "\"qa\"", "12"] {
            assert!(serde_json::from_str::<GeoboxId>(bad).is_err(), "{bad}");
        }
    }
}
