// src/traversal/grid_expander.rs

use std::collections::{BTreeSet, HashSet};
use std::iter::FusedIterator;

use crate::geohash::string_to_cell;
use crate::traversal::neighbors::{GeohashNeighbors, NeighborSource};
use crate::traversal::progress::{NoProgress, ProgressObserver};
use crate::types::{Cell, GridError, Result};

/// Converts a signed ring depth into the internal bound.
fn validate_depth(max_depth: i32) -> Result<u32> {
  u32::try_from(max_depth).map_err(|_| GridError::Configuration(format!("max depth must be >= 0, got {max_depth}")))
}

/// Maximum number of cells a depth-bounded expansion can yield on an
/// 8-neighbor grid: the `(2d + 1) x (2d + 1)` square around the center.
///
/// # Returns
/// `Ok(count)`, or `GridError::Configuration` if `max_depth` is negative.
pub fn max_grid_size(max_depth: i32) -> Result<u64> {
  let side = 2 * u64::from(validate_depth(max_depth)?) + 1;
  Ok(side * side)
}

/// Lazy breadth-first expansion of the grid around a central cell.
///
/// Cells come out ring by ring: the center first, then every cell one
/// neighbor step away, and so on up to `max_depth` rings. Each reachable cell
/// is produced exactly once. Within a ring cells come out in ascending token
/// order, so a traversal is reproducible.
///
/// The expander is single use. Once [`next_cell`](Self::next_cell) returns
/// `Ok(None)` or an error, every later call returns `Ok(None)`.
///
/// ```
/// use xs_geogrid::{Cell, GridExpander};
///
/// let cells: Vec<Cell> = GridExpander::new(Cell::new("ezs42"), 1)?
///   .collect::<Result<_, _>>()?;
/// assert_eq!(cells.len(), 9);
/// assert_eq!(cells[0].as_str(), "ezs42");
/// # Ok::<(), xs_geogrid::GridError>(())
/// ```
#[derive(Debug)]
pub struct GridExpander<N = GeohashNeighbors, P = NoProgress> {
  neighbors: N,
  progress: P,
  /// Cells of the active ring not yet handed out.
  pending: BTreeSet<Cell>,
  /// Cells discovered for the following ring.
  next_ring: BTreeSet<Cell>,
  /// Cells whose neighbors have been computed.
  visited: HashSet<Cell>,
  depth: u32,
  max_depth: u32,
  abandoned: bool,
}

impl GridExpander {
  /// Starts an expansion of up to `max_depth` rings around `center` using
  /// geohash adjacency.
  ///
  /// # Returns
  /// `GridError::Configuration` if `max_depth` is negative. The center is not
  /// validated here; a malformed or upper-case center surfaces as
  /// `GridError::InvalidCell` on the first pull. Use
  /// [`from_geohash`](Self::from_geohash) for user-supplied tokens.
  pub fn new(center: Cell, max_depth: i32) -> Result<Self> {
    let max_depth = validate_depth(max_depth)?;
    let mut pending = BTreeSet::new();
    pending.insert(center);
    Ok(Self {
      neighbors: GeohashNeighbors,
      progress: NoProgress,
      pending,
      next_ring: BTreeSet::new(),
      visited: HashSet::new(),
      depth: 0,
      max_depth,
      abandoned: false,
    })
  }

  /// Like [`new`](Self::new), but parses `center` with
  /// [`string_to_cell`](crate::string_to_cell) first, so `"EZS42"` and
  /// `" ezs42"` both start from `ezs42`.
  ///
  /// # Returns
  /// `GridError::InvalidCell` if `center` is not a geohash, or
  /// `GridError::Configuration` if `max_depth` is negative.
  pub fn from_geohash(center: &str, max_depth: i32) -> Result<Self> {
    Self::new(string_to_cell(center)?, max_depth)
  }
}

impl<N, P> GridExpander<N, P> {
  /// Replaces the adjacency used to discover the next rings.
  pub fn with_neighbors<M: NeighborSource>(self, neighbors: M) -> GridExpander<M, P> {
    GridExpander {
      neighbors,
      progress: self.progress,
      pending: self.pending,
      next_ring: self.next_ring,
      visited: self.visited,
      depth: self.depth,
      max_depth: self.max_depth,
      abandoned: self.abandoned,
    }
  }

  /// Attaches an observer notified on every ring advance.
  pub fn with_progress<Q: ProgressObserver>(self, progress: Q) -> GridExpander<N, Q> {
    GridExpander {
      neighbors: self.neighbors,
      progress,
      pending: self.pending,
      next_ring: self.next_ring,
      visited: self.visited,
      depth: self.depth,
      max_depth: self.max_depth,
      abandoned: self.abandoned,
    }
  }

  /// Index of the ring currently being handed out.
  #[must_use]
  pub fn depth(&self) -> u32 {
    self.depth
  }

  #[must_use]
  pub fn max_depth(&self) -> u32 {
    self.max_depth
  }

  /// Number of cells expanded so far.
  #[must_use]
  pub fn visited_len(&self) -> usize {
    self.visited.len()
  }

  /// Whether no further cell will be produced.
  #[must_use]
  pub fn is_exhausted(&self) -> bool {
    self.abandoned || (self.pending.is_empty() && (self.depth >= self.max_depth || self.next_ring.is_empty()))
  }

  /// Consumes the expander, returning its progress observer.
  pub fn into_progress(self) -> P {
    self.progress
  }
}

impl<N: NeighborSource, P: ProgressObserver> GridExpander<N, P> {
  /// Produces the next cell of the expansion.
  ///
  /// # Returns
  /// `Ok(Some(cell))` for the next cell, `Ok(None)` once every ring up to
  /// `max_depth` is drained, or `GridError::InvalidCell` if the neighbor
  /// source rejects a cell. After an error the expansion is abandoned.
  pub fn next_cell(&mut self) -> Result<Option<Cell>> {
    if self.abandoned {
      return Ok(None);
    }

    // Rings that discovered nothing still consume depth.
    while self.pending.is_empty() {
      if self.depth >= self.max_depth {
        return Ok(None);
      }
      self.advance_ring();
    }

    let Some(cell) = self.pending.pop_first() else {
      return Ok(None);
    };
    if let Err(err) = self.expand(&cell) {
      log::debug!("abandoning grid expansion at depth {}: {}", self.depth, err);
      self.abandoned = true;
      return Err(err);
    }
    Ok(Some(cell))
  }

  fn advance_ring(&mut self) {
    self.pending = std::mem::take(&mut self.next_ring);
    self.depth += 1;
    log::debug!(
      "grid ring {}/{}: {} cells, {} visited",
      self.depth,
      self.max_depth,
      self.pending.len(),
      self.visited.len()
    );
    self.progress.on_ring_advance(self.depth, self.max_depth);
  }

  /// Queues the unseen neighbors of `cell` for the next ring.
  fn expand(&mut self, cell: &Cell) -> Result<()> {
    if self.visited.contains(cell) {
      return Ok(());
    }

    let found = self.neighbors.neighbors(cell)?;
    for next in found {
      if next != *cell && !self.visited.contains(&next) && !self.pending.contains(&next) {
        self.next_ring.insert(next);
      }
    }
    self.visited.insert(cell.clone());
    Ok(())
  }
}

impl<N: NeighborSource, P: ProgressObserver> Iterator for GridExpander<N, P> {
  type Item = Result<Cell>;

  fn next(&mut self) -> Option<Self::Item> {
    self.next_cell().transpose()
  }
}

impl<N: NeighborSource, P: ProgressObserver> FusedIterator for GridExpander<N, P> {}
