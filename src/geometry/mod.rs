pub mod distance;
pub mod orientation;

pub use distance::{distance_to_boundary, distance_to_segment, distance_to_shape};
pub use orientation::{COLLINEAR_TOLERANCE, orientation};
