//! Turns control points into guide arrays.
//!
//! Every pair of consecutive control points spans a straight segment.
//! A guide array samples such a segment at `guide_count` evenly spaced fractions
//! `k / guide_count` for `k` in `0..guide_count`.
//! Because the divisor is `guide_count` and not `guide_count - 1`,
//! a guide array starts exactly at its left point but stops one step short of its right one.

use crate::geometry::{fraction, lerp, Point};
use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};

/// Control points as they are fed into the pipeline.
///
/// Closed curves carry an extra copy of their first point at the end.
pub type EffectivePoints = SmallVec<[Point; 8]>;

/// Points interpolated along a single segment
pub type GuideArray = Vec<Point>;

/// Ordered guide arrays, one per segment of the effective points.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideLevel(pub Vec<GuideArray>);

impl Deref for GuideLevel {
    type Target = Vec<GuideArray>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for GuideLevel {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl GuideLevel {
    /// Number of points in each guide array.
    pub fn guide_count(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }
}

/// Derives the points a curve is actually built from.
///
/// An open curve uses its control points as they are.
/// A closed curve wraps its last segment back to the start by repeating the first point.
pub fn effective_points(points: &[Point], closed: bool) -> EffectivePoints {
    let mut effective: EffectivePoints = points.iter().copied().collect();
    if closed {
        if let Some(&first) = points.first() {
            effective.push(first);
        }
    }
    effective
}

/// Samples `count` points along the segment from `left` towards `right`.
pub fn guide_points(left: &Point, right: &Point, count: usize) -> GuideArray {
    (0..count)
        .map(|k| lerp(left, right, fraction(k, count)))
        .collect()
}

/// Builds one guide array for every pair of consecutive `points`.
///
/// `n` points yield `n - 1` arrays of `guide_count` points each.
/// Less than two points don't span any segment and yield an empty level.
pub fn build_guides(points: &[Point], guide_count: usize) -> GuideLevel {
    GuideLevel(
        points
            .windows(2)
            .map(|pair| guide_points(&pair[0], &pair[1], guide_count))
            .collect(),
    )
}
