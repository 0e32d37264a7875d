// src/traversal/distance.rs

use crate::geohash::decode_bits;
use crate::types::{Cell, GridError, Result};

/// Produces the grid distance between two cells of the same precision.
///
/// This is the number of 8-way neighbor steps between them (Chebyshev
/// distance on the row/column grid), taking the shorter way around the
/// antimeridian. It equals the ring in which a breadth-first expansion from
/// `origin` first reaches `destination`.
///
/// # Returns
/// `Ok(distance)` on success, `GridError::InvalidCell` if either cell is
/// malformed, or `GridError::PrecisionMismatch` if the precisions differ.
pub fn grid_distance(origin: &Cell, destination: &Cell) -> Result<u64> {
  let a = decode_bits(origin)?;
  let b = decode_bits(destination)?;
  if a.precision != b.precision {
    return Err(GridError::PrecisionMismatch);
  }

  let d_lat = a.lat.abs_diff(b.lat);
  let d_lng = a.lng.abs_diff(b.lng);
  let d_lng = d_lng.min(a.columns() - d_lng);
  Ok(d_lat.max(d_lng))
}
