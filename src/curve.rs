//! The whole construction pipeline from control points to primitives.

use crate::config::EngineConfiguration;
use crate::geometry::Point;
use crate::guides::{build_guides, effective_points, EffectivePoints, GuideLevel};
use crate::reduce::{ReducedPair, Reduction};
use crate::render::{control_segments, render_curve, RenderPrimitive, Style};

/// A curve built from a complete set of control points.
///
/// Keeps every intermediate result around so they can be inspected after rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    effective: EffectivePoints,
    guides: GuideLevel,
    reduced: Option<ReducedPair>,
}

impl Curve {
    /// Runs the guide builder and the reducer.
    ///
    /// A curve of a single segment has nothing to reduce and is treated as a straight line.
    /// Less than two points don't make a curve at all and render nothing.
    pub fn new(points: &[Point], guide_count: usize, closed: bool, reduction: Reduction) -> Self {
        let effective = effective_points(points, closed);
        let guides = build_guides(&effective, guide_count);
        let reduced = match &effective[..] {
            [start, end] => Some(ReducedPair::line(*start, *end, guide_count)),
            _ => guides.reduce(reduction),
        };
        Curve {
            effective,
            guides,
            reduced,
        }
    }

    /// Builds the curve the way `config` describes it.
    pub fn from_config(points: &[Point], config: &EngineConfiguration) -> Self {
        Curve::new(points, config.guide_count, config.closed, config.reduction)
    }

    /// The control points including the closing point of closed curves
    pub fn effective_points(&self) -> &[Point] {
        &self.effective
    }

    /// The guide level before any reduction
    pub fn guides(&self) -> &GuideLevel {
        &self.guides
    }

    /// The two arrays the guides were reduced to
    pub fn reduced(&self) -> Option<&ReducedPair> {
        self.reduced.as_ref()
    }

    /// Samples the curve once per guide point, followed by the control segments.
    pub fn render(&self, style: &Style) -> Vec<RenderPrimitive> {
        let mut primitives = match &self.reduced {
            Some(pair) => render_curve(pair, pair.guide_count(), style),
            None => Vec::new(),
        };
        primitives.extend(control_segments(&self.effective, style));
        primitives
    }
}
