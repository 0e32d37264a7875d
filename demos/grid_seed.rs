// demos/grid_seed.rs
//
// Builds a crawl frontier from a TOML config (first argument) or the defaults.
//
//   RUST_LOG=info cargo run --example grid_seed -- grid.toml

use xs_geogrid::{max_grid_size, populate_frontier, FetchStatus, GridConfig, GridError, LogProgress, MemoryFrontier};

fn main() -> Result<(), GridError> {
  env_logger::init();

  let config = match std::env::args().nth(1) {
    Some(path) => GridConfig::load(path)?,
    None => GridConfig::default(),
  };
  let center = config.center_cell()?;
  log::info!(
    "seeding grid around {} (precision {}, depth {})",
    center,
    config.precision,
    config.max_depth
  );

  let capacity = usize::try_from(max_grid_size(config.max_depth)?).unwrap_or(usize::MAX);
  let mut frontier = MemoryFrontier::with_capacity(capacity);
  let expander = config.build_expander()?.with_progress(LogProgress);
  let inserted = populate_frontier(expander, &mut frontier)?;

  println!("{inserted} cells ready to crawl");
  println!("pending: {}", frontier.count_by_status(FetchStatus::Pending));
  for cell in frontier.pending_cells().take(9) {
    println!("  {cell}");
  }
  Ok(())
}
