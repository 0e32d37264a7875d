// src/indexing/to_cell.rs

use crate::constants::{MAX_LAT_DEG, MAX_LNG_DEG};
use crate::geohash::{encode_bits, validate_precision, GeohashBits};
use crate::types::{Cell, GridError, LatLng, Result};

/// Finds the geohash cell containing the given point at the specified precision.
///
/// # Arguments
/// * `geo` - The latitude/longitude point (in degrees).
/// * `precision` - Geohash length (1-12).
///
/// # Returns
/// `Ok(Cell)` on success, `GridError::PrecisionDomain` for a bad precision, or
/// `GridError::LatLngDomain` for non-finite or out-of-range coordinates.
/// Points on the north pole or the antimeridian at +180 land in the last
/// row/column.
pub fn lat_lng_to_cell(geo: &LatLng, precision: u8) -> Result<Cell> {
  validate_precision(precision)?;
  if !geo.lat.is_finite() || !geo.lng.is_finite() || geo.lat.abs() > MAX_LAT_DEG || geo.lng.abs() > MAX_LNG_DEG {
    return Err(GridError::LatLngDomain {
      lat: geo.lat,
      lng: geo.lng,
    });
  }

  let rows = 1u64 << GeohashBits::lat_bits_for(precision);
  let columns = 1u64 << GeohashBits::lng_bits_for(precision);
  let bits = GeohashBits {
    lat: grid_index(geo.lat, MAX_LAT_DEG, rows),
    lng: grid_index(geo.lng, MAX_LNG_DEG, columns),
    precision,
  };
  Ok(encode_bits(&bits))
}

/// Index of `value` among `divisions` equal slices of `[-half_range, half_range]`.
#[inline]
fn grid_index(value: f64, half_range: f64, divisions: u64) -> u64 {
  let scaled = ((value + half_range) / (2.0 * half_range) * divisions as f64).floor();
  (scaled.max(0.0) as u64).min(divisions - 1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lat_lng_to_cell_precision_domain() {
    let geo = LatLng::new(42.6, -5.6);
    assert!(matches!(lat_lng_to_cell(&geo, 0), Err(GridError::PrecisionDomain(0))));
    assert!(matches!(lat_lng_to_cell(&geo, 13), Err(GridError::PrecisionDomain(13))));
  }

  #[test]
  fn test_lat_lng_to_cell_lat_lng_domain() {
    for (lat, lng) in [(90.1, 0.0), (-91.0, 0.0), (0.0, 180.5), (f64::NAN, 0.0), (0.0, f64::INFINITY)] {
      assert!(
        matches!(lat_lng_to_cell(&LatLng::new(lat, lng), 5), Err(GridError::LatLngDomain { .. })),
        "expected ({lat}, {lng}) to be rejected"
      );
    }
  }

  #[test]
  fn test_lat_lng_to_cell_known_points() {
    assert_eq!(lat_lng_to_cell(&LatLng::new(42.6, -5.6), 5).unwrap().as_str(), "ezs42");
    assert_eq!(
      lat_lng_to_cell(&LatLng::new(57.64911, 10.40744), 11).unwrap().as_str(),
      "u4pruydqqvj"
    );
    assert_eq!(lat_lng_to_cell(&LatLng::new(39.9042, 116.4074), 7).unwrap().as_str(), "wx4g0bm");
  }

  #[test]
  fn test_lat_lng_to_cell_extremes() {
    assert_eq!(lat_lng_to_cell(&LatLng::new(90.0, 180.0), 3).unwrap().as_str(), "zzz");
    assert_eq!(lat_lng_to_cell(&LatLng::new(-90.0, -180.0), 3).unwrap().as_str(), "000");
    assert_eq!(lat_lng_to_cell(&LatLng::new(0.0, 0.0), 1).unwrap().as_str(), "s");
  }
}
