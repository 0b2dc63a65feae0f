pub mod reader;
pub mod scanner;
pub mod writer;

pub use reader::{parse_points, parse_shape, read_points, read_shape};
pub use scanner::Scanner;
pub use writer::{format_shape, write_shape};
