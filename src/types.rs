//! Core grid data structures.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GridError>;

/// A geohash cell: an opaque fixed-precision string token.
///
/// Construction through [`Cell::new`] is unchecked, the same way an arbitrary
/// string may or may not be a valid geohash. Use
/// [`string_to_cell`](crate::geohash::string_to_cell) to validate input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cell(String);

impl Cell {
  /// Wraps a string as a cell without validating it.
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  /// The cell token.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Number of characters in the token.
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// True for the empty token, which is never a valid cell.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[must_use]
  pub fn into_string(self) -> String {
    self.0
  }
}

impl fmt::Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for Cell {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl From<&str> for Cell {
  fn from(s: &str) -> Self {
    Self(s.to_owned())
  }
}

/// Latitude/longitude coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in degrees, `[-90, 90]`.
  pub lat: f64,
  /// Longitude in degrees, `[-180, 180]`.
  pub lng: f64,
}

impl LatLng {
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }
}

/// Geographic bounding box of a cell, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  /// North latitude.
  pub north: f64,
  /// South latitude.
  pub south: f64,
  /// East longitude.
  pub east: f64,
  /// West longitude.
  pub west: f64,
}

impl BBox {
  /// Center point of the box. Cell boxes never cross the antimeridian.
  #[must_use]
  pub fn center(&self) -> LatLng {
    LatLng {
      lat: (self.north + self.south) * 0.5,
      lng: (self.east + self.west) * 0.5,
    }
  }

  #[must_use]
  pub fn height(&self) -> f64 {
    self.north - self.south
  }

  #[must_use]
  pub fn width(&self) -> f64 {
    self.east - self.west
  }

  /// Whether the box contains `point`, edges inclusive.
  #[must_use]
  pub fn contains(&self, point: &LatLng) -> bool {
    point.lat >= self.south && point.lat <= self.north && point.lng >= self.west && point.lng <= self.east
  }
}

/// One of the eight compass directions between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  North = 0,
  NorthEast = 1,
  East = 2,
  SouthEast = 3,
  South = 4,
  SouthWest = 5,
  West = 6,
  NorthWest = 7,
}

impl Direction {
  /// All directions, clockwise from north.
  pub const ALL: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
  ];

  /// Row/column step `(d_lat, d_lng)` for this direction.
  #[must_use]
  pub const fn offset(self) -> (i64, i64) {
    match self {
      Direction::North => (1, 0),
      Direction::NorthEast => (1, 1),
      Direction::East => (0, 1),
      Direction::SouthEast => (-1, 1),
      Direction::South => (-1, 0),
      Direction::SouthWest => (-1, -1),
      Direction::West => (0, -1),
      Direction::NorthWest => (1, -1),
    }
  }

  #[must_use]
  pub const fn opposite(self) -> Direction {
    match self {
      Direction::North => Direction::South,
      Direction::NorthEast => Direction::SouthWest,
      Direction::East => Direction::West,
      Direction::SouthEast => Direction::NorthWest,
      Direction::South => Direction::North,
      Direction::SouthWest => Direction::NorthEast,
      Direction::West => Direction::East,
      Direction::NorthWest => Direction::SouthEast,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
    Direction::ALL
      .get(usize::from(value))
      .copied()
      .ok_or(GridError::UnknownCode(value))
  }
}

/// Errors surfaced by grid encoding and expansion.
#[derive(Debug, Error)]
pub enum GridError {
  /// The cell token is not a well-formed geohash.
  #[error("invalid cell `{0}`")]
  InvalidCell(String),
  /// A traversal or config parameter is out of range.
  #[error("invalid configuration: {0}")]
  Configuration(String),
  /// Latitude or longitude outside the valid range or not finite.
  #[error("coordinates out of range: lat {lat}, lng {lng}")]
  LatLngDomain { lat: f64, lng: f64 },
  /// Precision outside `1..=12`.
  #[error("precision {0} out of range")]
  PrecisionDomain(u8),
  /// The two cells have different precision.
  #[error("cells have different precision")]
  PrecisionMismatch,
  /// The cell is well formed but not stored in the frontier.
  #[error("cell `{0}` is not in the frontier")]
  UnknownCell(String),
  /// A numeric code does not name any variant of a `repr(u8)` enum.
  #[error("unknown code {0}")]
  UnknownCode(u8),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[cfg(feature = "serde")]
  #[error("config parse error: {0}")]
  ConfigParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_direction_opposites() {
    for dir in Direction::ALL {
      let (dl, dm) = dir.offset();
      let (ol, om) = dir.opposite().offset();
      assert_eq!((dl + ol, dm + om), (0, 0), "{dir:?}");
      assert_eq!(dir.opposite().opposite(), dir);
    }
  }

  #[test]
  fn test_direction_try_from() {
    assert_eq!(Direction::try_from(0).unwrap(), Direction::North);
    assert_eq!(Direction::try_from(7).unwrap(), Direction::NorthWest);
    assert!(matches!(Direction::try_from(8), Err(GridError::UnknownCode(8))));
    assert!(matches!(Direction::try_from(255), Err(GridError::UnknownCode(255))));
  }

  #[test]
  fn test_bbox_center_and_contains() {
    let bbox = BBox {
      north: 45.0,
      south: 0.0,
      east: 45.0,
      west: 0.0,
    };
    assert_eq!(bbox.center(), LatLng::new(22.5, 22.5));
    assert!(bbox.contains(&LatLng::new(0.0, 45.0)));
    assert!(!bbox.contains(&LatLng::new(-0.1, 10.0)));
    assert_eq!(bbox.height(), 45.0);
    assert_eq!(bbox.width(), 45.0);
  }

  #[test]
  fn test_cell_display() {
    let cell = Cell::new("wx4g0ec");
    assert_eq!(cell.to_string(), "wx4g0ec");
    assert_eq!(cell.len(), 7);
    assert!(!cell.is_empty());
    assert!(Cell::default().is_empty());
  }
}
