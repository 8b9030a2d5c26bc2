//! Defines the [`DrawPrimitive`] trait implemented by the various drawing surfaces.
//!
//! The pen only produces [`RenderPrimitive`]s, putting them on screen is someone else's job.
//! A surface is expected to draw a dot as a filled circle of radius 1,
//! a segment as a line and a label as text offset by [`LABEL_OFFSET`] from its point.
use crate::render::RenderPrimitive;

/// Offset of a label's text from the point it belongs to
pub const LABEL_OFFSET: (f64, f64) = (-5.0, 5.0);

/// Radius of the circle drawn for a dot
pub const DOT_RADIUS: f64 = 1.0;

/// Draw render primitives on different "drawing surfaces".
///
/// Use different crate features to implement different surfaces:
/// - `draw-svg` to write them into a svg document
pub trait DrawPrimitive {
    /// Add a single primitive to the surface.
    fn add_primitive(&mut self, primitive: &RenderPrimitive);

    /// Add all primitives in order.
    fn add_primitives(&mut self, primitives: &[RenderPrimitive]) {
        for primitive in primitives {
            self.add_primitive(primitive);
        }
    }
}

#[cfg(feature = "draw-svg")]
pub mod svg;
