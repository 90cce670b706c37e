/// Code length, hemisphere symbol included, used when the caller does not pick one.
pub const DEFAULT_PRECISION: usize = 18;

/// The cell symbols, indexed by `(lon_bit << 1) | lat_bit`.
///
/// Changing the order breaks compatibility with every code generated so far.
pub const ALPHABET: [u8; 4] = *b"gatc";

/// Hemisphere symbol for longitudes below zero.
pub const WEST: u8 = b'w';

/// Hemisphere symbol for longitudes at or above zero.
pub const EAST: u8 = b'e';

/// Inline capacity of a code before it spills to the heap.
pub(crate) const INLINE_SYMBOLS: usize = 24;

const DECODE_MAP: [i8; 128] = build_decode_map();

const fn build_decode_map() -> [i8; 128] {
    let mut map = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    map
}

/// The 2-bit value of an alphabet symbol, or `None` for anything else.
#[inline]
pub(crate) fn symbol_value(symbol: u8) -> Option<u8> {
    match DECODE_MAP.get(symbol as usize) {
        Some(&v) if v >= 0 => Some(v as u8),
        _ => None,
    }
}
