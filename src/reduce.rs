//! Collapses a [`GuideLevel`] down to two guide arrays.
//!
//! Each step combines two guide arrays into one by interpolating them index by index:
//! the `k`-th point of the combined array is `lerp(a[k], b[k], k / guide_count)`.
//! Repeating this until two arrays are left is the curve equivalent of de casteljau's
//! algorithm, only that every index of the arrays is advanced in parallel.

use crate::geometry::{fraction, lerp, Point};
use crate::guides::{GuideArray, GuideLevel};
use serde::{Deserialize, Serialize};

/// How consecutive guide arrays are paired up in every reduction step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    /// Pairs `(0, 1), (2, 3), ...` halving the level in each step.
    ///
    /// An odd array out at the end is carried into the next level unchanged.
    #[default]
    Pairwise,

    /// Pairs every overlapping `(i, i + 1)` shrinking the level by one in each step.
    Casteljau,
}

/// The two guide arrays a level was reduced to.
#[derive(Clone, Debug, PartialEq)]
pub struct ReducedPair {
    /// Both remaining arrays in their original order
    pub arrays: [GuideArray; 2],

    /// Number of reduction steps it took to get here
    pub steps: usize,
}

impl ReducedPair {
    /// The pair describing a straight segment between `start` and `end`.
    ///
    /// Used for curves whose only segment leaves nothing to reduce.
    pub fn line(start: Point, end: Point, guide_count: usize) -> Self {
        ReducedPair {
            arrays: [vec![start; guide_count], vec![end; guide_count]],
            steps: 0,
        }
    }

    /// Number of points in each array
    pub fn guide_count(&self) -> usize {
        self.arrays[0].len()
    }
}

/// Interpolates two guide arrays index by index.
pub fn lerp_arrays(left: &[Point], right: &[Point]) -> GuideArray {
    let count = right.len();
    left.iter()
        .zip(right.iter())
        .enumerate()
        .map(|(k, (l, r))| lerp(l, r, fraction(k, count)))
        .collect()
}

impl GuideLevel {
    /// Reduces the level until exactly two guide arrays remain.
    ///
    /// The level itself is left untouched, the reduction runs on a copy.
    /// Returns `None` for levels with less than two arrays.
    /// A level of exactly two arrays is returned as is.
    pub fn reduce(&self, reduction: Reduction) -> Option<ReducedPair> {
        if self.len() < 2 {
            return None;
        }

        let mut level = self.0.clone();
        let mut steps = 0;
        while level.len() > 2 {
            level = match reduction {
                Reduction::Pairwise => pairwise_step(&level),
                Reduction::Casteljau => casteljau_step(&level),
            };
            steps += 1;
            log::trace!("reduction step {} left {} guide arrays", steps, level.len());
        }

        let mut remaining = level.into_iter();
        let first = remaining.next()?;
        let second = remaining.next()?;
        Some(ReducedPair {
            arrays: [first, second],
            steps,
        })
    }
}

fn pairwise_step(level: &[GuideArray]) -> Vec<GuideArray> {
    let mut next = Vec::with_capacity((level.len() + 1) / 2);
    let mut pairs = level.chunks_exact(2);
    for pair in &mut pairs {
        next.push(lerp_arrays(&pair[0], &pair[1]));
    }
    if let [odd] = pairs.remainder() {
        next.push(odd.clone());
    }
    next
}

fn casteljau_step(level: &[GuideArray]) -> Vec<GuideArray> {
    level
        .windows(2)
        .map(|pair| lerp_arrays(&pair[0], &pair[1]))
        .collect()
}
