//! The geometry kernel everything else is built from.

use nalgebra::Vector2;

/// A position on the drawing surface.
///
/// Control points, guide points and dots all share this type.
pub type Point = Vector2<f64>;

/// Linear interpolation between `start` and `end`.
///
/// Returns `start * (1 - fraction) + end * fraction` componentwise.
/// `fraction = 0` yields `start` and `fraction = 1` yields `end` exactly.
/// The fraction isn't clamped, values outside of `[0, 1]` extrapolate along the line.
pub fn lerp(start: &Point, end: &Point, fraction: f64) -> Point {
    // Degenerate segment, e.g. the same position clicked twice
    if start == end {
        return *start;
    }
    start * (1.0 - fraction) + end * fraction
}

/// Fraction of the `index`-th step out of `steps`.
///
/// Zero steps map every index to `0` instead of dividing by zero.
pub(crate) fn fraction(index: usize, steps: usize) -> f64 {
    if steps == 0 {
        0.0
    } else {
        index as f64 / steps as f64
    }
}
