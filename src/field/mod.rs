pub mod grid;
pub mod points;

pub use grid::{GridSpec, write_grid, write_grid_file};
pub use points::{write_point_distances, write_point_distances_file};
