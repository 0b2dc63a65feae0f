use crate::domain::Point;

/// Cross products below this magnitude are treated as collinear
pub const COLLINEAR_TOLERANCE: f64 = 1e-8;

/// Sign of the signed area of triangle A->B->C.
///
/// Returns +1.0 when the triple winds counter-clockwise, -1.0 when it winds
/// clockwise. A collinear triple (magnitude below the tolerance) returns +1.0
/// by convention, not an error; downstream sign handling depends on that
/// default.
pub fn orientation(a: &Point, b: &Point, c: &Point) -> f64 {
    let val = a.x * b.y + a.y * c.x + b.x * c.y - a.y * b.x - a.x * c.y - b.y * c.x;

    if val.abs() > COLLINEAR_TOLERANCE {
        if val > 0.0 { 1.0 } else { -1.0 }
    } else {
        1.0
    }
}
