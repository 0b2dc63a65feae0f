use super::Boundary;

/// A collection of boundaries defining a possibly multiply-connected,
/// multiply-disjoint 2D region (e.g. a letter "O" is one CCW outer boundary
/// plus one hole boundary).
///
/// Ownership is a strict tree: the shape owns its boundaries, each boundary
/// owns its points. Once built, a shape is read-only for the query phase.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    pub boundaries: Vec<Boundary>,
}

impl Shape {
    pub fn new() -> Self {
        Self {
            boundaries: Vec::new(),
        }
    }

    pub fn push(&mut self, boundary: Boundary) {
        self.boundaries.push(boundary);
    }

    /// Total vertex count across all boundaries
    pub fn num_points(&self) -> usize {
        self.boundaries.iter().map(|b| b.points.len()).sum()
    }
}
