// src/traversal/neighbors.rs

use smallvec::SmallVec;

use crate::geohash::{decode_bits, encode_bits, GeohashBits};
use crate::types::{Cell, Direction, GridError, Result};

/// Neighbor list of a cell. Eight entries cover a full 2D neighborhood, so
/// this never spills to the heap for geohash grids.
pub type Neighbors = SmallVec<[Cell; 8]>;

/// Source of adjacency for a grid traversal.
///
/// Implementations must be deterministic, must not return the input cell
/// itself, must not return duplicates, and may return fewer cells at the
/// edges of the encoding space.
pub trait NeighborSource {
  /// Cells adjacent to `cell`, at the same precision.
  ///
  /// Fails with `GridError::InvalidCell` when `cell` is malformed.
  fn neighbors(&self, cell: &Cell) -> Result<Neighbors>;
}

impl<F> NeighborSource for F
where
  F: Fn(&Cell) -> Result<Neighbors>,
{
  fn neighbors(&self, cell: &Cell) -> Result<Neighbors> {
    self(cell)
  }
}

/// Geohash adjacency: the eight surrounding cells, wrapping at the antimeridian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeohashNeighbors;

impl NeighborSource for GeohashNeighbors {
  fn neighbors(&self, cell: &Cell) -> Result<Neighbors> {
    neighbors(cell)
  }
}

/// Steps one grid position away from `bits`. `None` past a pole.
fn step(bits: &GeohashBits, dir: Direction) -> Option<GeohashBits> {
  let (d_lat, d_lng) = dir.offset();
  let lat = bits.lat.checked_add_signed(d_lat)?;
  if lat >= bits.rows() {
    return None;
  }
  let columns = bits.columns();
  // Longitude wraps: stepping west of column 0 lands on the last column.
  let lng = (bits.lng + columns).checked_add_signed(d_lng)? % columns;
  Some(GeohashBits {
    lat,
    lng,
    precision: bits.precision,
  })
}

/// Returns the cell adjacent to `origin` in direction `dir`.
///
/// # Returns
/// `Ok(Some(cell))` for the neighbor, `Ok(None)` when the step would cross a
/// pole, or `GridError::InvalidCell` if `origin` is malformed.
pub fn neighbor(origin: &Cell, dir: Direction) -> Result<Option<Cell>> {
  let bits = decode_bits(origin)?;
  Ok(step(&bits, dir).map(|next| encode_bits(&next)))
}

/// Returns every cell adjacent to `origin`, clockwise from north.
///
/// Interior cells have eight neighbors. Cells in the polar rows have five.
/// At precisions where a direction would repeat a cell the duplicate is dropped.
pub fn neighbors(origin: &Cell) -> Result<Neighbors> {
  let bits = decode_bits(origin)?;
  let mut out = Neighbors::new();
  for dir in Direction::ALL {
    let Some(next) = step(&bits, dir) else {
      continue;
    };
    if next == bits {
      continue;
    }
    let cell = encode_bits(&next);
    if !out.contains(&cell) {
      out.push(cell);
    }
  }
  Ok(out)
}

/// Returns whether `origin` and `destination` share an edge or a corner.
///
/// # Returns
/// `Ok(true)` if neighbors, `Ok(false)` otherwise (including when both are the
/// same cell), `GridError::InvalidCell` if either is malformed, or
/// `GridError::PrecisionMismatch` if their precisions differ.
pub fn are_neighbor_cells(origin: &Cell, destination: &Cell) -> Result<bool> {
  let origin_bits = decode_bits(origin)?;
  let destination_bits = decode_bits(destination)?;
  if origin_bits.precision != destination_bits.precision {
    return Err(GridError::PrecisionMismatch);
  }
  if origin_bits == destination_bits {
    return Ok(false);
  }
  Ok(Direction::ALL.iter().any(|&dir| step(&origin_bits, dir) == Some(destination_bits)))
}
