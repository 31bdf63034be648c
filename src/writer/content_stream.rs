//! PDF content stream builder.
//!
//! Emits the small set of graphics and text operators the exporter needs,
//! according to PDF specification ISO 32000-1:2008 Sections 8-9.
//!
//! Builder methods take coordinates in design pixels and convert them to
//! points on the way in; color components are passed through unchanged.

use super::object_serializer::format_real;
use super::EOL;
use crate::color::Color;
use crate::geometry::{Point, UnitConverter};

/// Operations that can be added to a content stream.
///
/// Coordinates and sizes are stored in points.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f64),
    /// Move text position (Td)
    MoveText(f64, f64),
    /// Show text (Tj), written verbatim
    ShowText(String),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f64, f64, f64),
    /// Move to (m)
    MoveTo(f64, f64),
    /// Curve to (c)
    CurveTo(f64, f64, f64, f64, f64, f64),
    /// Rectangle (re)
    Rectangle(f64, f64, f64, f64),
    /// Fill, non-zero winding (f)
    Fill,
}

/// Builder for a single content stream.
#[derive(Debug, Default)]
pub struct PathCommandBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Pixel-to-point conversion applied to every coordinate
    units: UnitConverter,
}

impl PathCommandBuilder {
    /// Create a new builder that converts coordinates with `units`.
    pub fn new(units: UnitConverter) -> Self {
        Self {
            operations: Vec::new(),
            units,
        }
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations added so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    fn pt(&self, px: f64) -> f64 {
        self.units.to_pt(px)
    }

    /// Begin a path at a point.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let op = ContentStreamOp::MoveTo(self.pt(x), self.pt(y));
        self.op(op)
    }

    /// Append a rectangle subpath.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let op =
            ContentStreamOp::Rectangle(self.pt(x), self.pt(y), self.pt(width), self.pt(height));
        self.op(op)
    }

    /// Extend the path with a cubic Bézier curve from the current point to
    /// `(x3, y3)`, using `(x1, y1)` and `(x2, y2)` as control points.
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        let op = ContentStreamOp::CurveTo(
            self.pt(x1),
            self.pt(y1),
            self.pt(x2),
            self.pt(y2),
            self.pt(x3),
            self.pt(y3),
        );
        self.op(op)
    }

    /// Curve through explicit control and end points.
    pub fn curve_through(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y)
    }

    /// Set fill color with RGB components (0.0 - 1.0).
    pub fn set_fill_color(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorRGB(r, g, b))
    }

    /// Set fill color.
    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.set_fill_color(color.r, color.g, color.b)
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        self.op(ContentStreamOp::BeginText)
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        self.op(ContentStreamOp::EndText)
    }

    /// Select a font resource; `size` is in pixels.
    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        let op = ContentStreamOp::SetFont(resource.to_string(), self.pt(size));
        self.op(op)
    }

    /// Move the text position.
    pub fn move_text(&mut self, x: f64, y: f64) -> &mut Self {
        let op = ContentStreamOp::MoveText(self.pt(x), self.pt(y));
        self.op(op)
    }

    /// Show a string. The text is written as-is, without escaping.
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.op(ContentStreamOp::ShowText(text.to_string()))
    }

    /// Build the content stream bytes: one operator per line, CRLF separated.
    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for (i, op) in self.operations.iter().enumerate() {
            if i > 0 {
                buf.extend_from_slice(EOL);
            }
            self.write_op(&mut buf, op);
        }
        buf
    }

    fn write_op(&self, w: &mut Vec<u8>, op: &ContentStreamOp) {
        let n = |v: &f64| format_real(*v);
        let line = match op {
            ContentStreamOp::BeginText => "BT".to_string(),
            ContentStreamOp::EndText => "ET".to_string(),
            ContentStreamOp::SetFont(name, size) => format!("/{} {} Tf", name, n(size)),
            ContentStreamOp::MoveText(tx, ty) => format!("{} {} Td", n(tx), n(ty)),
            ContentStreamOp::ShowText(text) => format!("({}) Tj", text),
            ContentStreamOp::SetFillColorRGB(r, g, b) => {
                format!("{} {} {} rg", n(r), n(g), n(b))
            },
            ContentStreamOp::MoveTo(x, y) => format!("{} {} m", n(x), n(y)),
            ContentStreamOp::CurveTo(x1, y1, x2, y2, x3, y3) => {
                format!("{} {} {} {} {} {} c", n(x1), n(y1), n(x2), n(y2), n(x3), n(y3))
            },
            ContentStreamOp::Rectangle(x, y, width, height) => {
                format!("{} {} {} {} re", n(x), n(y), n(width), n(height))
            },
            ContentStreamOp::Fill => "f".to_string(),
        };
        w.extend_from_slice(line.as_bytes());
    }
}
