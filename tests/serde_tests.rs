// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use std::time::{Duration, SystemTime};

use xs_geogrid::*;

#[test]
fn test_cell_serde() {
  let cell = Cell::new("wx4g0ec");
  let serialized = serde_json::to_string(&cell).unwrap();
  // Cell is transparent over its token.
  assert_eq!(serialized, r#""wx4g0ec""#);
  let deserialized: Cell = serde_json::from_str(&serialized).unwrap();
  assert_eq!(cell, deserialized);
}

#[test]
fn test_fetch_status_serde() {
  assert_eq!(serde_json::to_string(&FetchStatus::Pending).unwrap(), "0");
  assert_eq!(serde_json::to_string(&FetchStatus::Failed).unwrap(), "2");
  let status: FetchStatus = serde_json::from_str("1").unwrap();
  assert_eq!(status, FetchStatus::Done);
  assert!(serde_json::from_str::<FetchStatus>("7").is_err());
}

#[test]
fn test_direction_serde() {
  assert_eq!(serde_json::to_string(&Direction::East).unwrap(), "2");
  let dir: Direction = serde_json::from_str("7").unwrap();
  assert_eq!(dir, Direction::NorthWest);
}

#[test]
fn test_grid_record_serde() {
  let record = GridRecord {
    cell: Cell::new("ezs42"),
    fetch_status: FetchStatus::Done,
    commit_date: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)),
  };
  let serialized = serde_json::to_string(&record).unwrap();
  let deserialized: GridRecord = serde_json::from_str(&serialized).unwrap();
  assert_eq!(record, deserialized);

  let pending = GridRecord::pending(Cell::new("ezs42"));
  assert_eq!(
    serde_json::to_string(&pending).unwrap(),
    r#"{"cell":"ezs42","fetch_status":0,"commit_date":null}"#
  );
}

#[test]
fn test_latlng_and_bbox_serde() {
  let ll = LatLng::new(42.5, -5.5);
  assert_eq!(serde_json::to_string(&ll).unwrap(), r#"{"lat":42.5,"lng":-5.5}"#);

  let bbox = cell_to_bbox(&Cell::new("s")).unwrap();
  let serialized = serde_json::to_string(&bbox).unwrap();
  let deserialized: BBox = serde_json::from_str(&serialized).unwrap();
  assert_eq!(bbox, deserialized);
}

#[test]
fn test_neighbors_serde() {
  let found = neighbors(&Cell::new("b")).unwrap();
  assert_eq!(serde_json::to_string(&found).unwrap(), r#"["c","9","8","x","z"]"#);
}
