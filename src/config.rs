//! TOML configuration for grid construction.
//!
//! ```toml
//! max_depth = 20
//! precision = 7
//! center = { lat = 39.9042, lng = 116.4074 }
//! ```
//!
//! The center may instead be given as a cell: `center = { cell = "wx4g0bm" }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_PRECISION};
use crate::geohash::{get_precision, string_to_cell, validate_precision};
use crate::indexing::lat_lng_to_cell;
use crate::traversal::GridExpander;
use crate::types::{Cell, GridError, LatLng, Result};

/// Where the grid is centered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CenterConfig {
  /// An explicit geohash; its length must match the configured precision.
  Cell { cell: String },
  /// A point, encoded at the configured precision.
  Point { lat: f64, lng: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
  #[serde(default = "default_max_depth")]
  pub max_depth: i32,
  #[serde(default = "default_precision")]
  pub precision: u8,
  pub center: CenterConfig,
}

fn default_max_depth() -> i32 {
  DEFAULT_MAX_DEPTH
}

fn default_precision() -> u8 {
  DEFAULT_PRECISION
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      max_depth: DEFAULT_MAX_DEPTH,
      precision: DEFAULT_PRECISION,
      center: CenterConfig::Point {
        lat: 39.9042,
        lng: 116.4074,
      },
    }
  }
}

impl GridConfig {
  /// Parses and validates a TOML document.
  pub fn from_toml_str(contents: &str) -> Result<Self> {
    let config: GridConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
  }

  /// Loads config from `path`. A missing file yields the defaults; a file that
  /// exists but does not parse is an error.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
      Ok(contents) => Self::from_toml_str(&contents),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        log::warn!("Config file {} not found. Using defaults.", path.display());
        Ok(Self::default())
      }
      Err(e) => Err(e.into()),
    }
  }

  pub fn to_toml_string(&self) -> Result<String> {
    toml::to_string_pretty(self).map_err(|e| GridError::Configuration(e.to_string()))
  }

  /// Checks depth, precision and center.
  pub fn validate(&self) -> Result<()> {
    if self.max_depth < 0 {
      return Err(GridError::Configuration(format!(
        "max_depth must be >= 0, got {}",
        self.max_depth
      )));
    }
    validate_precision(self.precision)?;
    self.center_cell().map(|_| ())
  }

  /// Resolves the configured center to a cell at the configured precision.
  pub fn center_cell(&self) -> Result<Cell> {
    match &self.center {
      CenterConfig::Cell { cell } => {
        let cell = string_to_cell(cell)?;
        if get_precision(&cell) != usize::from(self.precision) {
          return Err(GridError::Configuration(format!(
            "center cell `{}` does not have precision {}",
            cell, self.precision
          )));
        }
        Ok(cell)
      }
      CenterConfig::Point { lat, lng } => lat_lng_to_cell(&LatLng::new(*lat, *lng), self.precision),
    }
  }

  /// Creates a geohash expander for this configuration.
  pub fn build_expander(&self) -> Result<GridExpander> {
    GridExpander::new(self.center_cell()?, self.max_depth)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = GridConfig::default();
    assert_eq!(config.max_depth, 65);
    assert_eq!(config.precision, 7);
    assert_eq!(config.center_cell().unwrap().as_str(), "wx4g0bm");
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_config_toml_roundtrip() {
    let config = GridConfig::default();
    let serialized = config.to_toml_string().expect("serialize");
    let deserialized = GridConfig::from_toml_str(&serialized).expect("deserialize");
    assert_eq!(deserialized, config);
  }

  #[test]
  fn test_config_cell_center() {
    let config = GridConfig::from_toml_str(
      r#"
      max_depth = 2
      precision = 5
      center = { cell = "EZS42" }
      "#,
    )
    .unwrap();
    assert_eq!(config.center_cell().unwrap().as_str(), "ezs42");
    assert_eq!(config.build_expander().unwrap().count(), 25);
  }

  #[test]
  fn test_config_defaults_for_missing_fields() {
    let config = GridConfig::from_toml_str("center = { lat = 42.6, lng = -5.6 }").unwrap();
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.precision, DEFAULT_PRECISION);
  }

  #[test]
  fn test_config_rejects_bad_values() {
    assert!(matches!(
      GridConfig::from_toml_str("max_depth = -1\ncenter = { cell = \"wx4g0ec\" }"),
      Err(GridError::Configuration(_))
    ));
    assert!(matches!(
      GridConfig::from_toml_str("precision = 13\ncenter = { lat = 0.0, lng = 0.0 }"),
      Err(GridError::PrecisionDomain(13))
    ));
    assert!(matches!(
      GridConfig::from_toml_str("precision = 5\ncenter = { cell = \"wx4g0ec\" }"),
      Err(GridError::Configuration(_))
    ));
    assert!(matches!(
      GridConfig::from_toml_str("center = { lat = 95.0, lng = 0.0 }"),
      Err(GridError::LatLngDomain { .. })
    ));
    assert!(matches!(GridConfig::from_toml_str("max_depth = 3"), Err(GridError::ConfigParse(_))));
  }
}
