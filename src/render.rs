//! Converts reduced curves into drawable primitives.
//!
//! Nothing in here draws anything. The primitives are plain values handed to whatever
//! implements [`DrawPrimitive`](crate::draw::DrawPrimitive) (or to javascript).

use crate::geometry::{fraction, lerp, Point};
use crate::reduce::ReducedPair;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Colors used by the primitives
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Fully saturated color of the given hue in degrees
    Hue(f64),

    /// Color of the control segments
    Black,

    /// Color of the point labels
    Green,
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Hue(hue) => write!(f, "hsl({} 100% 50%)", hue),
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
        }
    }
}

/// What a segment belongs to, which decides its visibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Connects the two reduced arrays at one sample
    Curve,

    /// Connects two consecutive control points
    Control,
}

/// Which of the always computed primitives are displayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Display the black segments between control points
    pub show_control_segments: bool,

    /// Display the curve's segments instead of its dots
    pub show_curve_segments: bool,
}

/// A single element to be drawn
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderPrimitive {
    /// A point on the curve
    Dot {
        /// Where to draw it
        position: Point,
        /// Fill color
        color: Color,
        /// Whether it is displayed
        visible: bool,
    },

    /// A straight line
    Segment {
        /// Start of the line
        from: Point,
        /// End of the line
        to: Point,
        /// Stroke color
        color: Color,
        /// Curve or control segment
        layer: Layer,
        /// Whether it is displayed
        visible: bool,
    },

    /// A number next to a collected control point
    Label {
        /// The control point the label belongs to
        position: Point,
        /// The label's content
        text: String,
    },
}

impl RenderPrimitive {
    /// Label the `index`-th collected point (counting from 1).
    pub fn label(position: Point, index: usize) -> Self {
        RenderPrimitive::Label {
            position,
            text: index.to_string(),
        }
    }

    /// Whether the primitive is displayed at all
    pub fn is_visible(&self) -> bool {
        match self {
            RenderPrimitive::Dot { visible, .. } | RenderPrimitive::Segment { visible, .. } => {
                *visible
            }
            RenderPrimitive::Label { .. } => true,
        }
    }

    /// Update the visibility according to `style`.
    ///
    /// Dots and curve segments are mutually exclusive, labels are always visible.
    pub fn apply_style(&mut self, style: &Style) {
        match self {
            RenderPrimitive::Dot { visible, .. } => *visible = !style.show_curve_segments,
            RenderPrimitive::Segment { layer, visible, .. } => {
                *visible = match layer {
                    Layer::Curve => style.show_curve_segments,
                    Layer::Control => style.show_control_segments,
                }
            }
            RenderPrimitive::Label { .. } => {}
        }
    }
}

/// Hue of the `index`-th out of `sample_count` samples.
pub fn hue(index: usize, sample_count: usize) -> f64 {
    index as f64 * (360.0 / sample_count as f64)
}

/// Samples a reduced curve.
///
/// The `i`-th sample interpolates between the `i`-th points of both arrays at `i / (sample_count - 1)`.
/// Each sample produces a dot and a segment between the two points it was interpolated from.
/// Samples beyond the arrays' length are skipped.
pub fn render_curve(pair: &ReducedPair, sample_count: usize, style: &Style) -> Vec<RenderPrimitive> {
    let [left, right] = &pair.arrays;
    let steps = sample_count.saturating_sub(1);

    let mut primitives = Vec::with_capacity(2 * sample_count);
    for (i, (l, r)) in left.iter().zip(right.iter()).take(sample_count).enumerate() {
        let color = Color::Hue(hue(i, sample_count));
        primitives.push(RenderPrimitive::Dot {
            position: lerp(l, r, fraction(i, steps)),
            color,
            visible: !style.show_curve_segments,
        });
        primitives.push(RenderPrimitive::Segment {
            from: *l,
            to: *r,
            color,
            layer: Layer::Curve,
            visible: style.show_curve_segments,
        });
    }
    primitives
}

/// Connects every pair of consecutive `points` with a black segment.
pub fn control_segments<'a>(
    points: &'a [Point],
    style: &Style,
) -> impl Iterator<Item = RenderPrimitive> + 'a {
    let visible = style.show_control_segments;
    points.windows(2).map(move |pair| RenderPrimitive::Segment {
        from: pair[0],
        to: pair[1],
        color: Color::Black,
        layer: Layer::Control,
        visible,
    })
}
