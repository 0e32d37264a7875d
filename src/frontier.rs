//! Crawl frontier: the set of grid cells awaiting a downstream fetch.
//!
//! Every cell produced by a [`GridExpander`](crate::GridExpander) becomes one
//! [`GridRecord`], keyed by cell and starting out [`FetchStatus::Pending`].
//! Storage backends implement [`FrontierSink`]; [`MemoryFrontier`] keeps the
//! records in memory.

use std::collections::HashMap;
use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::types::{Cell, GridError, Result};

/// Fetch state of a frontier cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum FetchStatus {
  /// Not fetched yet.
  #[default]
  Pending = 0,
  /// Fetched successfully.
  Done = 1,
  /// The last fetch attempt failed.
  Failed = 2,
}

impl TryFrom<u8> for FetchStatus {
  type Error = GridError;

  fn try_from(value: u8) -> std::result::Result<Self, GridError> {
    match value {
      0 => Ok(FetchStatus::Pending),
      1 => Ok(FetchStatus::Done),
      2 => Ok(FetchStatus::Failed),
      _ => Err(GridError::UnknownCode(value)),
    }
  }
}

/// One row of the crawl frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridRecord {
  /// Unique key.
  pub cell: Cell,
  pub fetch_status: FetchStatus,
  /// When the status last changed, if ever.
  pub commit_date: Option<SystemTime>,
}

impl GridRecord {
  /// A fresh, never-fetched record.
  #[must_use]
  pub fn pending(cell: Cell) -> Self {
    Self {
      cell,
      fetch_status: FetchStatus::Pending,
      commit_date: None,
    }
  }
}

/// Destination for frontier records.
pub trait FrontierSink {
  /// Stores `record` unless its cell is already present.
  ///
  /// # Returns
  /// `Ok(true)` if stored, `Ok(false)` if the cell was already known.
  fn insert(&mut self, record: GridRecord) -> Result<bool>;
}

/// Insertion-ordered in-memory frontier.
#[derive(Debug, Clone, Default)]
pub struct MemoryFrontier {
  records: Vec<GridRecord>,
  index: HashMap<Cell, usize>,
}

impl MemoryFrontier {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-sizes storage, e.g. from [`max_grid_size`](crate::max_grid_size).
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      records: Vec::with_capacity(capacity),
      index: HashMap::with_capacity(capacity),
    }
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.records.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  #[must_use]
  pub fn get(&self, cell: &Cell) -> Option<&GridRecord> {
    self.index.get(cell).map(|&i| &self.records[i])
  }

  /// Records in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &GridRecord> {
    self.records.iter()
  }

  /// Cells still waiting for a fetch, in insertion order.
  pub fn pending_cells(&self) -> impl Iterator<Item = &Cell> {
    self
      .records
      .iter()
      .filter(|r| r.fetch_status == FetchStatus::Pending)
      .map(|r| &r.cell)
  }

  #[must_use]
  pub fn count_by_status(&self, status: FetchStatus) -> usize {
    self.records.iter().filter(|r| r.fetch_status == status).count()
  }

  /// Updates the fetch status of a known cell.
  ///
  /// # Returns
  /// `GridError::UnknownCell` if `cell` is not in the frontier.
  pub fn set_status(&mut self, cell: &Cell, status: FetchStatus, when: Option<SystemTime>) -> Result<()> {
    let &i = self.index.get(cell).ok_or_else(|| GridError::UnknownCell(cell.to_string()))?;
    let record = &mut self.records[i];
    record.fetch_status = status;
    record.commit_date = when;
    Ok(())
  }
}

impl FrontierSink for MemoryFrontier {
  fn insert(&mut self, record: GridRecord) -> Result<bool> {
    if self.index.contains_key(&record.cell) {
      return Ok(false);
    }
    self.index.insert(record.cell.clone(), self.records.len());
    self.records.push(record);
    Ok(true)
  }
}

/// Drains `cells` into `sink` as pending records.
///
/// Stops at the first error from either side.
///
/// # Returns
/// The number of records newly stored.
pub fn populate_frontier<I, S>(cells: I, sink: &mut S) -> Result<usize>
where
  I: IntoIterator<Item = Result<Cell>>,
  S: FrontierSink + ?Sized,
{
  let mut inserted = 0;
  let mut skipped = 0;
  for cell in cells {
    if sink.insert(GridRecord::pending(cell?))? {
      inserted += 1;
    } else {
      skipped += 1;
    }
  }
  log::info!("frontier populated: {} cells stored, {} already present", inserted, skipped);
  Ok(inserted)
}
