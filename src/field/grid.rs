use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Point, Shape};
use crate::error::{Error, Result};
use crate::geometry::distance_to_shape;

/// Sampling window and resolution for grid mode.
///
/// The window is square: both axes share `[xymin, xymax)` and `res`. Sample
/// `i` of `res` lies at `(i/res)·(xymax−xymin) + xymin`, so the upper bound
/// itself is never sampled.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    pub xymin: f64,
    pub xymax: f64,
    pub res: u32,
}

impl GridSpec {
    pub fn new(xymin: f64, xymax: f64, res: u32) -> Self {
        Self { xymin, xymax, res }
    }

    /// Reject inverted ranges and zero resolution before any output happens.
    pub fn validate(&self) -> Result<()> {
        if self.xymin > self.xymax {
            return Err(Error::InvalidArgument(format!(
                "inverted range: xymin {} > xymax {}",
                self.xymin, self.xymax
            )));
        }
        if self.res == 0 {
            return Err(Error::InvalidArgument(
                "resolution must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn coord(&self, i: u32) -> f64 {
        (i as f64 / self.res as f64) * (self.xymax - self.xymin) + self.xymin
    }
}

/// Sample the field on a regular grid and write it row-major.
///
/// The outer loop index drives x, one output row per x sample; values are
/// written with six decimals, space-separated (trailing space per row), one
/// newline per row.
pub fn write_grid<W: Write>(writer: &mut W, shape: &Shape, spec: &GridSpec) -> Result<()> {
    spec.validate()?;

    for ix in 0..spec.res {
        for iy in 0..spec.res {
            let p = Point::new(spec.coord(ix), spec.coord(iy));
            write!(writer, "{:.6} ", distance_to_shape(&p, shape))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Grid-sample to a file. Parameters are validated before the output file is
/// created, so a bad request leaves no file behind.
pub fn write_grid_file(path: &Path, shape: &Shape, spec: &GridSpec) -> Result<()> {
    spec.validate()?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_grid(&mut writer, shape, spec)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::shapefile::parse_shape;
    use tempfile::tempdir;

    const UNIT_SQUARE: &str = "1\n4 0\n0.0 0.0\n1.0 0.0\n1.0 1.0\n0.0 1.0\n";

    #[test]
    fn test_grid_2x2() {
        let shape = parse_shape(UNIT_SQUARE.as_bytes()).unwrap();
        let spec = GridSpec::new(0.0, 1.0, 2);

        let mut buf = Vec::new();
        write_grid(&mut buf, &shape, &spec).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.split_whitespace().count(), 2);
        }

        // Sample (0.5, 0.5) is the last cell: 0.5 inside the square
        let last: f64 = rows[1].split_whitespace().last().unwrap().parse().unwrap();
        assert!((last + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_grid_samples_exclude_upper_bound() {
        let spec = GridSpec::new(0.0, 1.0, 4);
        assert_eq!(spec.coord(0), 0.0);
        assert_eq!(spec.coord(3), 0.75);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let shape = parse_shape(UNIT_SQUARE.as_bytes()).unwrap();
        let spec = GridSpec::new(1.0, 0.0, 8);
        let mut buf = Vec::new();
        assert!(matches!(
            write_grid(&mut buf, &shape, &spec),
            Err(Error::InvalidArgument(_))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_zero_resolution_rejected_before_output() {
        let shape = parse_shape(UNIT_SQUARE.as_bytes()).unwrap();
        let spec = GridSpec::new(0.0, 1.0, 0);

        let dir = tempdir().unwrap();
        let path = dir.path().join("field.txt");
        assert!(write_grid_file(&path, &shape, &spec).is_err());
        assert!(!path.exists());
    }
}
