//! Design elements.
//!
//! A design is an ordered list of shapes in pixel space (origin top-left,
//! y grows downward). The set of shapes is closed: every consumer matches on
//! [`Element`] exhaustively, so adding a shape is a compile-time checked
//! change.
//!
//! The design tool hands elements over as loosely-typed records
//! (`{"id", "type", "attrs"}`); [`ElementRecord`] is that wire form and
//! converts into [`Element`] with the tag and attributes validated.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text shown by a freshly created text element.
pub const DEFAULT_TEXT: &str = "Hover over to start editing";

/// Filled circle, positioned by the top-left corner of its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Left edge of the bounding box (px)
    #[serde(deserialize_with = "number")]
    pub x: f64,
    /// Top edge of the bounding box (px)
    #[serde(deserialize_with = "number")]
    pub y: f64,
    /// Radius (px)
    #[serde(deserialize_with = "number")]
    pub radius: f64,
    /// Color reference (hex literal or palette name)
    pub color: String,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 100.0,
            color: "red".to_string(),
        }
    }
}

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Left edge (px)
    #[serde(deserialize_with = "number")]
    pub x: f64,
    /// Top edge (px)
    #[serde(deserialize_with = "number")]
    pub y: f64,
    /// Width (px)
    #[serde(deserialize_with = "number")]
    pub width: f64,
    /// Height (px)
    #[serde(deserialize_with = "number")]
    pub height: f64,
    /// Color reference (hex literal or palette name)
    pub color: String,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 75.0,
            color: "blue".to_string(),
        }
    }
}

/// Single-line text label, always drawn in black.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    /// Left edge (px)
    #[serde(deserialize_with = "number")]
    pub x: f64,
    /// Top edge (px)
    #[serde(deserialize_with = "number")]
    pub y: f64,
    /// Label content, written verbatim
    pub text: String,
}

impl Default for TextLabel {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

/// A shape in a design.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Filled circle
    Circle(Circle),
    /// Filled rectangle
    Rect(Rectangle),
    /// Text label
    Text(TextLabel),
}

impl Element {
    /// Create an element of the given kind with the design tool's defaults.
    pub fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Circle => Element::Circle(Circle::default()),
            ElementKind::Rect => Element::Rect(Rectangle::default()),
            ElementKind::Text => Element::Text(TextLabel::default()),
        }
    }

    /// The kind tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Circle(_) => ElementKind::Circle,
            Element::Rect(_) => ElementKind::Rect,
            Element::Text(_) => ElementKind::Text,
        }
    }
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Element::Circle(circle)
    }
}

impl From<Rectangle> for Element {
    fn from(rect: Rectangle) -> Self {
        Element::Rect(rect)
    }
}

impl From<TextLabel> for Element {
    fn from(text: TextLabel) -> Self {
        Element::Text(text)
    }
}

/// Shape tags understood by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `"circle"`
    Circle,
    /// `"rect"`
    Rect,
    /// `"text"`
    Text,
}

impl ElementKind {
    /// Wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Circle => "circle",
            ElementKind::Rect => "rect",
            ElementKind::Text => "text",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "circle" => Ok(ElementKind::Circle),
            "rect" => Ok(ElementKind::Rect),
            "text" => Ok(ElementKind::Text),
            other => Err(Error::UnsupportedElementType(other.to_string())),
        }
    }
}

/// Loosely-typed element record as stored by the design tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Element id (unused by the exporter)
    #[serde(default)]
    pub id: Option<String>,
    /// Shape tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Shape attributes
    #[serde(default)]
    pub attrs: serde_json::Value,
}

impl TryFrom<ElementRecord> for Element {
    type Error = Error;

    fn try_from(record: ElementRecord) -> Result<Self> {
        let kind: ElementKind = record.kind.parse()?;
        let invalid = |e: serde_json::Error| Error::InvalidElement {
            kind: kind.to_string(),
            reason: e.to_string(),
        };
        let attrs = record.attrs;
        Ok(match kind {
            ElementKind::Circle => Element::Circle(serde_json::from_value(attrs).map_err(invalid)?),
            ElementKind::Rect => Element::Rect(serde_json::from_value(attrs).map_err(invalid)?),
            ElementKind::Text => Element::Text(serde_json::from_value(attrs).map_err(invalid)?),
        })
    }
}

impl TryFrom<&Element> for ElementRecord {
    type Error = Error;

    /// Fails with [`Error::InvalidElement`] if a numeric attribute is NaN or
    /// infinite.
    fn try_from(element: &Element) -> Result<Self> {
        let numbers = match element {
            Element::Circle(c) => vec![c.x, c.y, c.radius],
            Element::Rect(r) => vec![r.x, r.y, r.width, r.height],
            Element::Text(t) => vec![t.x, t.y],
        };
        let kind = element.kind();
        if let Some(bad) = numbers.iter().find(|n| !n.is_finite()) {
            return Err(Error::InvalidElement {
                kind: kind.to_string(),
                reason: format!("non-finite number {}", bad),
            });
        }
        let attrs = match element {
            Element::Circle(c) => serde_json::to_value(c)?,
            Element::Rect(r) => serde_json::to_value(r)?,
            Element::Text(t) => serde_json::to_value(t)?,
        };
        Ok(Self {
            id: None,
            kind: kind.to_string(),
            attrs,
        })
    }
}

/// Deserialize a number that may arrive as a numeric string.
///
/// Edit forms submit attribute values as query-string text.
pub(crate) fn number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, found \"{}\"", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(kind: &str, attrs: serde_json::Value) -> ElementRecord {
        ElementRecord {
            id: Some("0".to_string()),
            kind: kind.to_string(),
            attrs,
        }
    }

    #[test]
    fn test_defaults_match_design_tool() {
        assert_eq!(
            Element::new(ElementKind::Circle),
            Element::Circle(Circle {
                x: 0.0,
                y: 0.0,
                radius: 100.0,
                color: "red".to_string()
            })
        );
        match Element::new(ElementKind::Rect) {
            Element::Rect(r) => {
                assert_eq!((r.width, r.height), (200.0, 75.0));
                assert_eq!(r.color, "blue");
            },
            other => panic!("expected rect, got {:?}", other),
        }
        match Element::new(ElementKind::Text) {
            Element::Text(t) => assert_eq!(t.text, DEFAULT_TEXT),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_round_trips_through_tag() {
        for kind in [ElementKind::Circle, ElementKind::Rect, ElementKind::Text] {
            assert_eq!(kind.as_str().parse::<ElementKind>().unwrap(), kind);
            assert_eq!(Element::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = "triangle".parse::<ElementKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedElementType(ref t) if t == "triangle"));

        // Tags are case-sensitive on the wire.
        assert!("Circle".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_record_to_circle() {
        let element = Element::try_from(record(
            "circle",
            json!({"x": 10, "y": 20, "radius": 5, "color": "#00ff00", "rotation": 0}),
        ))
        .unwrap();
        assert_eq!(
            element,
            Element::Circle(Circle {
                x: 10.0,
                y: 20.0,
                radius: 5.0,
                color: "#00ff00".to_string()
            })
        );
    }

    #[test]
    fn test_record_accepts_numeric_strings() {
        let element = Element::try_from(record(
            "rect",
            json!({"x": "10", "y": " 2.5 ", "width": "100", "height": 50, "color": "red"}),
        ))
        .unwrap();
        match element {
            Element::Rect(r) => {
                assert_eq!(r.x, 10.0);
                assert_eq!(r.y, 2.5);
                assert_eq!(r.width, 100.0);
            },
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_record_rejects_non_numeric_string() {
        let err = Element::try_from(record(
            "circle",
            json!({"x": "left", "y": 0, "radius": 5, "color": "red"}),
        ))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidElement { ref kind, .. } if kind == "circle"));
    }

    #[test]
    fn test_record_missing_attribute() {
        let err = Element::try_from(record("text", json!({"x": 0, "y": 0}))).unwrap_err();
        match err {
            Error::InvalidElement { kind, reason } => {
                assert_eq!(kind, "text");
                assert!(reason.contains("text"));
            },
            other => panic!("expected InvalidElement, got {:?}", other),
        }
    }

    #[test]
    fn test_record_unknown_kind() {
        let err = Element::try_from(record("polygon", json!({}))).unwrap_err();
        assert!(matches!(err, Error::UnsupportedElementType(_)));
    }

    #[test]
    fn test_element_to_record() {
        let element = Element::new(ElementKind::Rect);
        let record = ElementRecord::try_from(&element).unwrap();
        assert_eq!(record.kind, "rect");
        assert_eq!(record.attrs["width"], json!(200.0));
        assert_eq!(Element::try_from(record).unwrap(), element);
    }

    #[test]
    fn test_non_finite_element_has_no_record() {
        let element = Element::Rect(Rectangle {
            x: f64::NAN,
            ..Rectangle::default()
        });
        let err = ElementRecord::try_from(&element).unwrap_err();
        assert!(matches!(err, Error::InvalidElement { ref kind, .. } if kind == "rect"));

        let element = Element::Circle(Circle {
            radius: f64::INFINITY,
            ..Circle::default()
        });
        assert!(ElementRecord::try_from(&element).is_err());
    }
}
