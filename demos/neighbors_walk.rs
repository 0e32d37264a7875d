// demos/neighbors_walk.rs

use xs_geogrid::{
  cell_to_bbox, grid_distance, lat_lng_to_cell, neighbor, neighbors, Direction, GridError, LatLng,
};

fn main() -> Result<(), GridError> {
  let origin = lat_lng_to_cell(&LatLng::new(42.6, -5.6), 5)?;
  let bbox = cell_to_bbox(&origin)?;
  println!(
    "{origin}: lat {:.5}..{:.5}, lng {:.5}..{:.5}",
    bbox.south, bbox.north, bbox.west, bbox.east
  );

  for cell in neighbors(&origin)? {
    println!("  {} (distance {})", cell, grid_distance(&origin, &cell)?);
  }

  // Walk east three steps.
  let mut cell = origin.clone();
  for _ in 0..3 {
    match neighbor(&cell, Direction::East)? {
      Some(next) => cell = next,
      None => break,
    }
  }
  println!("three cells east: {} (distance {})", cell, grid_distance(&origin, &cell)?);
  Ok(())
}
