//! Per-element content streams.
//!
//! Each design element becomes its own content stream. Geometry is computed
//! in design pixels with the y axis flipped to PDF's bottom-left origin, then
//! handed to [`PathCommandBuilder`], which converts to points.

use super::content_stream::PathCommandBuilder;
use crate::color::{Color, ColorResolver};
use crate::elements::{Circle, Element, Rectangle, TextLabel};
use crate::geometry::{Point, Rect, UnitConverter};

/// Bézier control-point ratio for a quarter circle: `(4/3) * tan(π/8)`.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Font size of text labels in design pixels.
pub const FONT_SIZE_PX: f64 = 16.0;

/// Page resource name of the label font.
pub const FONT_RESOURCE: &str = "F1";

/// One cubic Bézier segment continuing from the previous end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    /// First control point
    pub c1: Point,
    /// Second control point
    pub c2: Point,
    /// End point
    pub end: Point,
}

/// Closed four-segment approximation of a circle, in flipped pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePath {
    /// Path start, the bottom-most point of the circle
    pub start: Point,
    /// Quarter arcs, counter-clockwise; the last one ends at `start`
    pub segments: [BezierSegment; 4],
}

impl CirclePath {
    /// Approximate `circle` on a page `page_height` pixels tall.
    ///
    /// The circle's `(x, y)` is the top-left corner of its bounding box.
    pub fn new(circle: &Circle, page_height: f64) -> Self {
        let r = circle.radius;
        let d = 2.0 * r;
        let bez = r * KAPPA;
        let bbox = Rect::new(circle.x, circle.y, d, d).flip_y(page_height);
        let (x, y) = (bbox.x, bbox.y);

        let start = Point::new(x + r, y);
        let segments = [
            BezierSegment {
                c1: Point::new(x + r - bez, y),
                c2: Point::new(x, y + r - bez),
                end: Point::new(x, y + r),
            },
            BezierSegment {
                c1: Point::new(x, y + r + bez),
                c2: Point::new(x + r - bez, y + d),
                end: Point::new(x + r, y + d),
            },
            BezierSegment {
                c1: Point::new(x + r + bez, y + d),
                c2: Point::new(x + d, y + r + bez),
                end: Point::new(x + d, y + r),
            },
            BezierSegment {
                c1: Point::new(x + d, y + r - bez),
                c2: Point::new(x + r + bez, y),
                end: start,
            },
        ];
        Self { start, segments }
    }

    /// Whether the last segment ends exactly where the path started.
    pub fn is_closed(&self) -> bool {
        self.segments[3].end == self.start
    }
}

/// Renders design elements into content stream bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementRenderer {
    units: UnitConverter,
}

impl ElementRenderer {
    /// Create a renderer converting units with `units`.
    pub fn new(units: UnitConverter) -> Self {
        Self { units }
    }

    /// Render one element on a page `page_height` pixels tall.
    pub fn render(&self, element: &Element, page_height: f64) -> Vec<u8> {
        let mut builder = PathCommandBuilder::new(self.units);
        match element {
            Element::Circle(circle) => self.circle(&mut builder, circle, page_height),
            Element::Rect(rect) => self.rect(&mut builder, rect, page_height),
            Element::Text(text) => self.text(&mut builder, text, page_height),
        }
        let body = builder.build();
        log::debug!("rendered {} element: {} bytes", element.kind(), body.len());
        body
    }

    /// Label font size in points.
    pub fn font_size_pt(&self) -> f64 {
        self.units.to_pt(FONT_SIZE_PX)
    }

    fn text(&self, b: &mut PathCommandBuilder, text: &TextLabel, page_height: f64) {
        // Td places the baseline; lift it by one font size so (x, y) reads as the top-left.
        let baseline = page_height - text.y - self.font_size_pt();
        b.begin_text()
            .fill_color(Color::black())
            .set_font(FONT_RESOURCE, FONT_SIZE_PX)
            .move_text(text.x, baseline)
            .show_text(&text.text)
            .end_text();
    }

    fn rect(&self, b: &mut PathCommandBuilder, rect: &Rectangle, page_height: f64) {
        let area = Rect::new(rect.x, rect.y, rect.width, rect.height).flip_y(page_height);
        b.fill_color(ColorResolver::resolve(&rect.color))
            .rect(area.x, area.y, area.width, area.height)
            .fill();
    }

    fn circle(&self, b: &mut PathCommandBuilder, circle: &Circle, page_height: f64) {
        let path = CirclePath::new(circle, page_height);
        b.fill_color(ColorResolver::resolve(&circle.color))
            .move_to(path.start.x, path.start.y);
        for seg in &path.segments {
            b.curve_through(seg.c1, seg.c2, seg.end);
        }
        b.fill();
    }
}
