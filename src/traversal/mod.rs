// src/traversal/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod distance;
pub mod grid_expander;
pub mod neighbors;
pub mod progress;

pub use distance::grid_distance;
pub use grid_expander::{max_grid_size, GridExpander};
pub use neighbors::{are_neighbor_cells, neighbor, neighbors, GeohashNeighbors, NeighborSource, Neighbors};
pub use progress::{progress_percent, LogProgress, NoProgress, ProgressObserver};
