// tests/geohash_tests.rs

use std::collections::HashSet;

use xs_geogrid::*;

#[test]
fn test_known_encodings() {
  let cases = [
    (42.6, -5.6, 5, "ezs42"),
    (57.64911, 10.40744, 11, "u4pruydqqvj"),
    (39.9042, 116.4074, 7, "wx4g0bm"),
    (0.0, 0.0, 1, "s"),
  ];
  for (lat, lng, precision, expected) in cases {
    let cell = lat_lng_to_cell(&LatLng::new(lat, lng), precision).unwrap();
    assert_eq!(cell.as_str(), expected);
    assert!(cell_to_bbox(&cell).unwrap().contains(&LatLng::new(lat, lng)));
  }
}

#[test]
fn test_neighbors_are_mutual() {
  for token in ["ezs42", "wx4g0ec", "zz", "00", "b", "u4pruydqqvj"] {
    let origin = Cell::new(token);
    let found = neighbors(&origin).unwrap();
    let unique: HashSet<_> = found.iter().collect();
    assert_eq!(unique.len(), found.len(), "duplicates around {token}");
    assert!(!found.contains(&origin));
    for n in &found {
      assert_eq!(get_precision(n), get_precision(&origin));
      assert!(are_neighbor_cells(n, &origin).unwrap(), "{n} -> {token}");
      assert!(neighbors(n).unwrap().contains(&origin));
      assert_eq!(grid_distance(&origin, n).unwrap(), 1);
    }
  }
  // Only canonical tokens take part in adjacency.
  assert!(matches!(neighbors(&Cell::new("EZS42")), Err(GridError::InvalidCell(_))));
  assert!(matches!(
    are_neighbor_cells(&Cell::new("EZS42"), &Cell::new("ezs48")),
    Err(GridError::InvalidCell(_))
  ));
}

#[test]
fn test_neighbor_counts() {
  assert_eq!(neighbors(&Cell::new("wx4g0ec")).unwrap().len(), 8);
  assert_eq!(neighbors(&Cell::new("zzzz")).unwrap().len(), 5);
  assert_eq!(neighbors(&Cell::new("0000")).unwrap().len(), 5);
}

#[test]
fn test_neighbor_bboxes_touch() {
  let origin = Cell::new("wx4g0ec");
  let bbox = cell_to_bbox(&origin).unwrap();
  let north = neighbor(&origin, Direction::North).unwrap().unwrap();
  assert_eq!(cell_to_bbox(&north).unwrap().south, bbox.north);
  let east = neighbor(&origin, Direction::East).unwrap().unwrap();
  assert_eq!(cell_to_bbox(&east).unwrap().west, bbox.east);
}

#[test]
fn test_validation_helpers() {
  assert!(is_valid_cell("wx4g0ec"));
  assert!(!is_valid_cell("wx4g0ea"));
  assert!(matches!(string_to_cell("wx4g0ea"), Err(GridError::InvalidCell(_))));
  assert!(matches!(
    lat_lng_to_cell(&LatLng::new(0.0, 0.0), MAX_PRECISION + 1),
    Err(GridError::PrecisionDomain(_))
  ));
  assert!(lat_lng_to_cell(&LatLng::new(0.0, 0.0), MIN_PRECISION).is_ok());
}

#[test]
fn test_error_messages() {
  assert_eq!(GridError::InvalidCell("ab".into()).to_string(), "invalid cell `ab`");
  assert_eq!(GridError::PrecisionDomain(13).to_string(), "precision 13 out of range");
  assert_eq!(
    GridError::Configuration("max depth must be >= 0, got -1".into()).to_string(),
    "invalid configuration: max depth must be >= 0, got -1"
  );
  assert_eq!(
    GridError::UnknownCell("ezs42".into()).to_string(),
    "cell `ezs42` is not in the frontier"
  );
  assert_eq!(GridError::UnknownCode(9).to_string(), "unknown code 9");
}
