//! Write primitives into a svg document
//!
//! ```
//! use bezier_pen::draw::svg::Svg;
//! use bezier_pen::draw::DrawPrimitive;
//! use bezier_pen::{Point, RenderPrimitive};
//!
//! let mut svg = Svg::new(300.0);
//! svg.add_primitive(&RenderPrimitive::label(Point::new(10.0, 10.0), 1));
//! assert!(svg.to_string().contains("<text x=\"5\" y=\"15\""));
//! ```

use crate::draw::{DrawPrimitive, DOT_RADIUS, LABEL_OFFSET};
use crate::geometry::Point;
use crate::render::{Color, RenderPrimitive};
use std::fmt::{Display, Formatter};

/// A square svg document with a white background.
pub struct Svg {
    /// Edge length of the document
    pub size: f64,

    /// Elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl Svg {
    /// An empty document of the given edge length
    pub fn new(size: f64) -> Self {
        Svg {
            size,
            elements: Vec::new(),
        }
    }

    /// Append an arbitrary element.
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }

    /// Drop all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl Display for Svg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg version=\"1.0\" xmlns=\"http://www.w3.org/2000/svg\" style=\"background-color: white\" viewBox=\"0 0 {size} {size}\" width=\"{size}\" height=\"{size}\">",
            size = self.size
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

impl DrawPrimitive for Svg {
    fn add_primitive(&mut self, primitive: &RenderPrimitive) {
        match primitive {
            RenderPrimitive::Dot {
                position,
                color,
                visible,
            } => self.add_elem(Circle {
                center: *position,
                radius: DOT_RADIUS,
                color: *color,
                visible: *visible,
            }),
            RenderPrimitive::Segment {
                from,
                to,
                color,
                visible,
                ..
            } => self.add_elem(Line {
                from: *from,
                to: *to,
                color: *color,
                visible: *visible,
            }),
            RenderPrimitive::Label { position, text } => self.add_elem(Text {
                anchor: *position,
                text: text.clone(),
                color: Color::Green,
            }),
        }
    }
}

/// `<line>` element
pub struct Line {
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
    /// Stroke color
    pub color: Color,
    /// Written with `display="none"` if not set
    pub visible: bool,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"",
            self.from.x, self.from.y, self.to.x, self.to.y, self.color
        )?;
        if !self.visible {
            write!(f, " display=\"none\"")?;
        }
        writeln!(f, "/>")
    }
}

/// Filled `<circle>` element
pub struct Circle {
    /// Center point
    pub center: Point,
    /// Radius
    pub radius: f64,
    /// Fill color
    pub color: Color,
    /// Written with `display="none"` if not set
    pub visible: bool,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
            self.center.x, self.center.y, self.radius, self.color
        )?;
        if !self.visible {
            write!(f, " display=\"none\"")?;
        }
        writeln!(f, "/>")
    }
}

/// `<text>` element placed at [`LABEL_OFFSET`] from its anchor
pub struct Text {
    /// The point the text belongs to
    pub anchor: Point,
    /// Content
    pub text: String,
    /// Fill and stroke color
    pub color: Color,
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<text x=\"{}\" y=\"{}\" fill=\"{color}\" stroke=\"{color}\">{}</text>",
            self.anchor.x + LABEL_OFFSET.0,
            self.anchor.y + LABEL_OFFSET.1,
            escape(&self.text),
            color = self.color,
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Name of the image a screenshot of the surface is saved as.
///
/// `timestamp` is expected to be in ISO 8601 format.
pub fn export_file_name(timestamp: &str) -> String {
    format!("bezier_{}.png", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Layer;

    #[test]
    fn hidden_line() {
        let mut svg = Svg::new(300.0);
        svg.add_primitive(&RenderPrimitive::Segment {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 5.0),
            color: Color::Black,
            layer: Layer::Control,
            visible: false,
        });
        assert_eq!(
            svg.elements[0].to_string(),
            "<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"5\" stroke=\"black\" display=\"none\"/>\n"
        );
    }

    #[test]
    fn dot() {
        let mut svg = Svg::new(300.0);
        svg.add_primitives(&[RenderPrimitive::Dot {
            position: Point::new(1.5, 2.0),
            color: Color::Hue(90.0),
            visible: true,
        }]);
        assert_eq!(
            svg.elements[0].to_string(),
            "<circle cx=\"1.5\" cy=\"2\" r=\"1\" fill=\"hsl(90 100% 50%)\"/>\n"
        );
    }

    #[test]
    fn document() {
        let mut svg = Svg::new(400.0);
        svg.add_primitive(&RenderPrimitive::label(Point::new(20.0, 20.0), 2));
        let document = svg.to_string();
        assert!(document.starts_with("<svg "));
        assert!(document.contains("viewBox=\"0 0 400 400\""));
        assert!(document.contains(
            "<text x=\"15\" y=\"25\" fill=\"green\" stroke=\"green\">2</text>"
        ));
        assert!(document.trim_end().ends_with("</svg>"));

        svg.clear();
        assert!(!svg.to_string().contains("<text"));
    }

    #[test]
    fn file_name() {
        assert_eq!(
            export_file_name("2024-01-02T03:04:05.000Z"),
            "bezier_2024-01-02T03:04:05.000Z.png"
        );
    }
}
