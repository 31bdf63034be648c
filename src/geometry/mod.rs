//! Geometric primitives and unit conversion.
//!
//! Designs are laid out in CSS pixels with a top-left origin; PDF user space
//! is measured in points with a bottom-left origin. This module provides the
//! basic types used to move between the two.

/// Points per inch in PDF user space.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Pixels per inch assumed for the design space.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Convert pixels to points without rounding.
///
/// # Examples
///
/// ```
/// use design_pdf::geometry::px_to_pt;
///
/// assert_eq!(px_to_pt(96.0), 72.0);
/// assert_eq!(px_to_pt(0.0), 0.0);
/// ```
#[inline]
pub fn px_to_pt(px: f64) -> f64 {
    px * POINTS_PER_INCH / PIXELS_PER_INCH
}

/// Rounding applied after converting pixels to points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitPolicy {
    /// Keep the fractional part (default).
    #[default]
    Precise,
    /// Truncate toward zero to a whole point.
    Truncate,
}

/// Pixel-to-point converter bound to a rounding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitConverter {
    policy: UnitPolicy,
}

impl UnitConverter {
    /// Create a converter with the given policy.
    pub fn new(policy: UnitPolicy) -> Self {
        Self { policy }
    }

    /// Convert a pixel measurement to points.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_pdf::geometry::{UnitConverter, UnitPolicy};
    ///
    /// let precise = UnitConverter::new(UnitPolicy::Precise);
    /// let legacy = UnitConverter::new(UnitPolicy::Truncate);
    /// assert_eq!(precise.to_pt(10.0), 7.5);
    /// assert_eq!(legacy.to_pt(10.0), 7.0);
    /// ```
    #[inline]
    pub fn to_pt(&self, px: f64) -> f64 {
        let pt = px_to_pt(px);
        match self.policy {
            UnitPolicy::Precise => pt,
            UnitPolicy::Truncate => pt.trunc(),
        }
    }
}

/// A 2D point in design (pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: origin corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the origin corner
    pub x: f64,
    /// Y coordinate of the origin corner
    pub y: f64,
    /// Width of rectangle
    pub width: f64,
    /// Height of rectangle
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_pdf::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the lower edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y
    }

    /// Get the upper edge y-coordinate.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this rectangle contains a point (edges inclusive).
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Convert a top-left-origin rectangle into bottom-left-origin space.
    ///
    /// `page_height` is the height of the space the rectangle lives in.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_pdf::geometry::Rect;
    ///
    /// let flipped = Rect::new(0.0, 0.0, 100.0, 50.0).flip_y(400.0);
    /// assert_eq!(flipped.y, 350.0);
    /// ```
    pub fn flip_y(&self, page_height: f64) -> Self {
        Self::new(self.x, page_height - self.y - self.height, self.width, self.height)
    }
}
