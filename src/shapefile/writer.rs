use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Shape;
use crate::error::Result;

/// Write a shape to a description file readable by [`super::read_shape`].
pub fn write_shape(path: &Path, shape: &Shape) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    format_shape(&mut writer, shape)?;
    writer.flush()?;
    Ok(())
}

/// Serialize a shape in the description format.
///
/// Coordinates use `f64` display formatting, which is plain decimal (never
/// exponent notation), so the output is always re-scannable and a re-parse
/// reproduces the exact point values.
pub fn format_shape<W: Write>(writer: &mut W, shape: &Shape) -> Result<()> {
    writeln!(writer, "{}", shape.boundaries.len())?;
    for boundary in &shape.boundaries {
        writeln!(
            writer,
            "{} {}",
            boundary.points.len(),
            if boundary.is_hole { 1 } else { 0 }
        )?;
        for point in &boundary.points {
            writeln!(writer, "{} {}", point.x, point.y)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Boundary, Point, Shape};
    use crate::shapefile::{parse_shape, read_shape};
    use tempfile::tempdir;

    fn sample_shape() -> Shape {
        let mut shape = Shape::new();
        shape.push(Boundary::new(
            vec![
                Point::new(0.1, -0.25),
                Point::new(2.5, 0.0),
                Point::new(1.75, 3.125),
            ],
            false,
        ));
        shape.push(Boundary::new(
            vec![
                Point::new(1.0, 0.5),
                Point::new(1.5, 0.5),
                Point::new(1.25, 1.0),
            ],
            true,
        ));
        shape
    }

    #[test]
    fn test_round_trip() {
        let shape = sample_shape();

        let mut buf = Vec::new();
        format_shape(&mut buf, &shape).unwrap();
        let reparsed = parse_shape(&buf[..]).unwrap();

        assert_eq!(reparsed.boundaries.len(), shape.boundaries.len());
        for (a, b) in shape.boundaries.iter().zip(&reparsed.boundaries) {
            assert_eq!(a.is_hole, b.is_hole);
            assert_eq!(a.is_ccw, b.is_ccw);
            assert_eq!(a.points, b.points);
        }
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shape.txt");

        let shape = sample_shape();
        write_shape(&path, &shape).unwrap();
        let reparsed = read_shape(&path).unwrap();

        assert_eq!(reparsed.num_points(), shape.num_points());
        assert_eq!(reparsed.boundaries[1].points, shape.boundaries[1].points);
    }
}
