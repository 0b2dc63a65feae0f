use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Point, Shape};
use crate::error::Result;
use crate::geometry::distance_to_shape;

/// Evaluate the field at explicit query points, one six-decimal value per
/// line in list order.
pub fn write_point_distances<W: Write>(
    writer: &mut W,
    shape: &Shape,
    points: &[Point],
) -> Result<()> {
    for p in points {
        writeln!(writer, "{:.6}", distance_to_shape(p, shape))?;
    }
    Ok(())
}

/// Point-list sampling to a file.
pub fn write_point_distances_file(path: &Path, shape: &Shape, points: &[Point]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_point_distances(&mut writer, shape, points)?;
    writer.flush()?;
    Ok(())
}
