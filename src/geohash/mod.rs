// src/geohash/mod.rs

pub mod string_conv;

use crate::constants::{BASE32_ALPHABET, BASE32_DECODE, BITS_PER_CHAR, INVALID_DIGIT, MAX_PRECISION, MIN_PRECISION};
use crate::types::{Cell, GridError, Result};

pub use string_conv::{is_valid_cell, string_to_cell};

/// A geohash unpacked into its row (latitude) and column (longitude) on the
/// `2^lat_bits x 2^lng_bits` grid of its precision.
///
/// Geohash interleaves bits starting with longitude, so for odd bit counts
/// longitude carries the extra bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GeohashBits {
  pub(crate) lat: u64,
  pub(crate) lng: u64,
  pub(crate) precision: u8,
}

impl GeohashBits {
  /// Latitude bits at `precision`.
  #[inline]
  pub(crate) const fn lat_bits_for(precision: u8) -> u32 {
    (precision as u32 * BITS_PER_CHAR) / 2
  }

  /// Longitude bits at `precision`.
  #[inline]
  pub(crate) const fn lng_bits_for(precision: u8) -> u32 {
    (precision as u32 * BITS_PER_CHAR + 1) / 2
  }

  /// Number of rows at this precision.
  #[inline]
  pub(crate) const fn rows(&self) -> u64 {
    1 << Self::lat_bits_for(self.precision)
  }

  /// Number of columns at this precision.
  #[inline]
  pub(crate) const fn columns(&self) -> u64 {
    1 << Self::lng_bits_for(self.precision)
  }
}

/// Checks that `precision` is within `1..=12`.
pub(crate) fn validate_precision(precision: u8) -> Result<()> {
  if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
    Ok(())
  } else {
    Err(GridError::PrecisionDomain(precision))
  }
}

/// Precision (character count) of a cell.
#[inline]
#[must_use]
pub fn get_precision(cell: &Cell) -> usize {
  cell.len()
}

/// Unpacks a cell into grid row/column. Fails for malformed tokens, including
/// upper-case ones: every cell handled here is in its canonical lower-case form.
pub(crate) fn decode_bits(cell: &Cell) -> Result<GeohashBits> {
  let token = cell.as_str().as_bytes();
  let precision = u8::try_from(token.len()).map_err(|_| GridError::InvalidCell(cell.to_string()))?;
  if validate_precision(precision).is_err() {
    return Err(GridError::InvalidCell(cell.to_string()));
  }

  let mut lat = 0u64;
  let mut lng = 0u64;
  let mut is_lng = true;
  for &byte in token {
    let value = BASE32_DECODE.get(usize::from(byte)).copied().unwrap_or(INVALID_DIGIT);
    if value == INVALID_DIGIT {
      return Err(GridError::InvalidCell(cell.to_string()));
    }
    for shift in (0..BITS_PER_CHAR).rev() {
      let bit = u64::from((value >> shift) & 1);
      if is_lng {
        lng = (lng << 1) | bit;
      } else {
        lat = (lat << 1) | bit;
      }
      is_lng = !is_lng;
    }
  }

  Ok(GeohashBits { lat, lng, precision })
}

/// Packs grid row/column back into a cell token.
///
/// `bits.lat` and `bits.lng` must already be within the grid at `bits.precision`.
pub(crate) fn encode_bits(bits: &GeohashBits) -> Cell {
  let mut lat_remaining = GeohashBits::lat_bits_for(bits.precision);
  let mut lng_remaining = GeohashBits::lng_bits_for(bits.precision);
  let mut token = String::with_capacity(usize::from(bits.precision));
  let mut is_lng = true;

  for _ in 0..bits.precision {
    let mut value = 0usize;
    for _ in 0..BITS_PER_CHAR {
      let bit = if is_lng {
        lng_remaining -= 1;
        (bits.lng >> lng_remaining) & 1
      } else {
        lat_remaining -= 1;
        (bits.lat >> lat_remaining) & 1
      };
      value = (value << 1) | bit as usize;
      is_lng = !is_lng;
    }
    token.push(char::from(BASE32_ALPHABET[value]));
  }

  Cell::new(token)
}
