//! Geohash and grid constants.

/// Geohash base32 alphabet (no `a`, `i`, `l`, `o`).
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Marker for bytes outside the alphabet in [`BASE32_DECODE`].
pub(crate) const INVALID_DIGIT: u8 = 0xff;

/// Reverse lookup of [`BASE32_ALPHABET`], indexed by ASCII byte.
/// Only the canonical lower-case digits decode.
pub(crate) const BASE32_DECODE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
  let mut table = [INVALID_DIGIT; 128];
  let mut i = 0;
  while i < BASE32_ALPHABET.len() {
    let ch = BASE32_ALPHABET[i];
    table[ch as usize] = i as u8;
    i += 1;
  }
  table
}

/// Bits encoded by one geohash character.
pub const BITS_PER_CHAR: u32 = 5;

/// Minimum geohash precision (characters).
pub const MIN_PRECISION: u8 = 1;
/// Maximum geohash precision. 12 characters interleave 30 latitude and
/// 30 longitude bits.
pub const MAX_PRECISION: u8 = 12;

/// Precision used for crawl grids unless configured otherwise (cells of
/// roughly 150m x 150m).
pub const DEFAULT_PRECISION: u8 = 7;
/// Ring depth used for crawl grids unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: i32 = 65;

pub const MAX_LAT_DEG: f64 = 90.0;
pub const MAX_LNG_DEG: f64 = 180.0;
