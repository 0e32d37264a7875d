// src/traversal/progress.rs

/// Receives a notification each time a traversal advances to a new ring.
///
/// This is a presentation hook only; observers cannot influence the traversal.
pub trait ProgressObserver {
  /// Called after the traversal moves to ring `depth` of `max_depth`.
  fn on_ring_advance(&mut self, depth: u32, max_depth: u32);
}

impl<F> ProgressObserver for F
where
  F: FnMut(u32, u32),
{
  fn on_ring_advance(&mut self, depth: u32, max_depth: u32) {
    self(depth, max_depth);
  }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
  #[inline]
  fn on_ring_advance(&mut self, _depth: u32, _max_depth: u32) {}
}

/// Observer that logs each ring advance at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
  fn on_ring_advance(&mut self, depth: u32, max_depth: u32) {
    log::info!(
      "building map grid (depth {}/{}) {:.2}%",
      depth,
      max_depth,
      progress_percent(depth, max_depth)
    );
  }
}

/// Share of the ring budget consumed, in percent. A zero-depth traversal is
/// complete from the start.
#[must_use]
pub fn progress_percent(depth: u32, max_depth: u32) -> f64 {
  if max_depth == 0 {
    return 100.0;
  }
  f64::from(depth.min(max_depth)) / f64::from(max_depth) * 100.0
}
