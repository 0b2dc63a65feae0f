//! Readers for the shape description and point-list formats.
//!
//! Shape description: boundary count, then per boundary a point count and a
//! hole flag followed by that many x/y pairs. Point list: a count followed by
//! x/y pairs. All values are numeric tokens; see [`Scanner`].
//!
//! Any failure aborts the whole load: a truncated or malformed file never
//! yields a partial shape or point list.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::Scanner;
use crate::domain::{Boundary, Point, Shape};
use crate::error::{Error, Result};

/// Load a shape description file.
pub fn read_shape(path: &Path) -> Result<Shape> {
    let file = File::open(path)?;
    parse_shape(BufReader::new(file))
}

/// Parse a shape description from any byte stream.
pub fn parse_shape<R: Read>(input: R) -> Result<Shape> {
    let mut scanner = Scanner::new(input);

    let num_boundaries = scanner.next_int()?;
    if num_boundaries <= 0 {
        return Err(Error::InvalidArgument(format!(
            "boundary count must be positive, got {num_boundaries}"
        )));
    }

    let mut shape = Shape::new();
    for _ in 0..num_boundaries {
        shape.push(parse_boundary(&mut scanner)?);
    }

    Ok(shape)
}

/// Load a query point list file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let file = File::open(path)?;
    parse_points(BufReader::new(file))
}

/// Parse a point list from any byte stream.
pub fn parse_points<R: Read>(input: R) -> Result<Vec<Point>> {
    let mut scanner = Scanner::new(input);

    let num_points = scanner.next_int()?;
    if num_points <= 0 {
        return Err(Error::InvalidArgument(format!(
            "point count must be positive, got {num_points}"
        )));
    }

    let mut points = Vec::with_capacity(num_points as usize);
    for _ in 0..num_points {
        points.push(parse_point(&mut scanner)?);
    }

    Ok(points)
}

fn parse_boundary<R: Read>(scanner: &mut Scanner<R>) -> Result<Boundary> {
    let num_points = scanner.next_int()?;
    let is_hole = scanner.next_int()? != 0;

    if num_points <= 0 {
        return Err(Error::InvalidArgument(format!(
            "point count must be positive, got {num_points}"
        )));
    }

    let mut points = Vec::with_capacity(num_points as usize);
    for _ in 0..num_points {
        points.push(parse_point(scanner)?);
    }

    // Winding is classified here, once the boundary is fully populated
    Ok(Boundary::new(points, is_hole))
}

fn parse_point<R: Read>(scanner: &mut Scanner<R>) -> Result<Point> {
    let x = scanner.next_float()?;
    let y = scanner.next_float()?;
    Ok(Point::new(x, y))
}
