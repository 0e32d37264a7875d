// src/geohash/string_conv.rs

use crate::geohash::{decode_bits, encode_bits};
use crate::types::{Cell, Result};

/// Whether `s` is a canonical geohash of precision 1 to 12.
///
/// Upper-case tokens are not canonical; pass them through [`string_to_cell`].
#[must_use]
pub fn is_valid_cell(s: &str) -> bool {
  decode_bits(&Cell::new(s)).is_ok()
}

/// Parses a string into a validated, lower-case `Cell`.
///
/// Surrounding whitespace is trimmed and upper-case input is lower-cased.
///
/// # Returns
/// `Ok(Cell)` on success, or `GridError::InvalidCell` if the string is empty,
/// longer than 12 characters, or contains characters outside the base32 alphabet.
pub fn string_to_cell(s: &str) -> Result<Cell> {
  let bits = decode_bits(&Cell::new(s.trim().to_ascii_lowercase()))?;
  Ok(encode_bits(&bits))
}
