// src/indexing/mod.rs

pub mod from_cell;
pub mod to_cell;

pub use from_cell::{cell_to_bbox, cell_to_lat_lng};
pub use to_cell::lat_lng_to_cell;
