// src/indexing/from_cell.rs

use crate::constants::{MAX_LAT_DEG, MAX_LNG_DEG};
use crate::geohash::decode_bits;
use crate::types::{BBox, Cell, LatLng, Result};

/// Finds the bounding box of the given cell.
///
/// # Returns
/// `Ok(BBox)` on success, or `GridError::InvalidCell` if the cell is malformed.
pub fn cell_to_bbox(cell: &Cell) -> Result<BBox> {
  let bits = decode_bits(cell)?;
  let height = 2.0 * MAX_LAT_DEG / bits.rows() as f64;
  let width = 2.0 * MAX_LNG_DEG / bits.columns() as f64;

  let south = -MAX_LAT_DEG + bits.lat as f64 * height;
  let west = -MAX_LNG_DEG + bits.lng as f64 * width;
  Ok(BBox {
    north: south + height,
    south,
    east: west + width,
    west,
  })
}

/// Finds the center point of the given cell.
pub fn cell_to_lat_lng(cell: &Cell) -> Result<LatLng> {
  Ok(cell_to_bbox(cell)?.center())
}
