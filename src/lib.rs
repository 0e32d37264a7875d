#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Errors are documented under "# Returns"
#![allow(clippy::cast_possible_truncation)] // Grid indices are bounded by precision
#![allow(clippy::cast_precision_loss)] // Grid sizes stay below 2^31
#![allow(clippy::cast_sign_loss)] // Clamped before casting
#![allow(clippy::must_use_candidate)]

//! `xs-geogrid` precomputes the geohash cells around a central point that seed
//! a crawler over a geography-partitioned data source.
//!
//! The core is [`GridExpander`], a lazy, depth-bounded breadth-first
//! expansion that yields every cell within `max_depth` neighbor rings of the
//! center exactly once, ring by ring. Geohash encoding and adjacency live in
//! [`geohash`], [`indexing`] and [`traversal::neighbors`]; the produced cells
//! feed a [`frontier`] of fetch records.

// Declare modules
#[cfg(feature = "serde")]
pub mod config;
pub mod constants;
pub mod frontier;
pub mod geohash;
pub mod indexing;
pub mod traversal;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{DEFAULT_MAX_DEPTH, DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};
pub use types::{BBox, Cell, Direction, GridError, LatLng, Result};

#[cfg(feature = "serde")]
pub use config::{CenterConfig, GridConfig};
pub use frontier::{populate_frontier, FetchStatus, FrontierSink, GridRecord, MemoryFrontier};
pub use geohash::{get_precision, is_valid_cell, string_to_cell};
pub use indexing::{cell_to_bbox, cell_to_lat_lng, lat_lng_to_cell};
pub use traversal::{
  are_neighbor_cells, grid_distance, max_grid_size, neighbor, neighbors, progress_percent, GeohashNeighbors,
  GridExpander, LogProgress, NeighborSource, Neighbors, NoProgress, ProgressObserver,
};
