//! Design snapshots.
//!
//! A [`Design`] is the finalized, read-only input to the exporter: page
//! dimensions in pixels plus an ordered list of elements. Element order fixes
//! paint order and output object numbering.

use crate::elements::{number, Element, ElementRecord};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Canvas width used when a design record carries no dimensions (px).
pub const DEFAULT_WIDTH: f64 = 750.0;

/// Canvas height used when a design record carries no dimensions (px).
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Canvas width (px)
    #[serde(deserialize_with = "number")]
    pub width: f64,
    /// Canvas height (px)
    #[serde(deserialize_with = "number")]
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Immutable design snapshot handed to the exporter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Design {
    /// Design id
    pub id: String,
    /// Canvas size
    pub dimensions: Dimensions,
    /// Elements in paint order
    pub elements: Vec<Element>,
}

impl Design {
    /// Create an empty design.
    pub fn new(id: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            id: id.into(),
            dimensions,
            elements: Vec::new(),
        }
    }

    /// Append an element.
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Parse the design tool's JSON record form.
    ///
    /// Fails with [`Error::UnsupportedElementType`] on the first element whose
    /// tag is not a known shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: DesignRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    /// Serialize to the design tool's JSON record form.
    ///
    /// Fails with [`Error::InvalidElement`] if an element carries a NaN or
    /// infinite number.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&DesignRecord::try_from(self)?)?)
    }
}

/// Wire form of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    /// Design id
    #[serde(default)]
    pub id: String,
    /// Canvas size
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Element records in paint order
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
}

impl TryFrom<DesignRecord> for Design {
    type Error = Error;

    fn try_from(record: DesignRecord) -> Result<Self> {
        let elements = record
            .elements
            .into_iter()
            .map(Element::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            id: record.id,
            dimensions: record.dimensions,
            elements,
        })
    }
}

impl TryFrom<&Design> for DesignRecord {
    type Error = Error;

    fn try_from(design: &Design) -> Result<Self> {
        let elements = design
            .elements
            .iter()
            .map(ElementRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            id: design.id.clone(),
            dimensions: design.dimensions,
            elements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementKind, Rectangle, TextLabel};

    #[test]
    fn test_from_json() {
        let json = r##"{
            "id": "7",
            "dimensions": {"width": 750, "height": 400},
            "elements": [
                {"id": "0", "type": "rect", "attrs": {"x": 0, "y": 0, "width": 200, "height": 75, "color": "blue", "rotation": 0}},
                {"id": "1", "type": "text", "attrs": {"x": 10, "y": 10, "width": 100, "height": 40, "text": "Hi"}}
            ]
        }"##;
        let design = Design::from_json(json).unwrap();
        assert_eq!(design.id, "7");
        assert_eq!(design.dimensions, Dimensions::new(750.0, 400.0));
        assert_eq!(design.elements.len(), 2);
        assert_eq!(design.elements[0].kind(), ElementKind::Rect);
        assert_eq!(design.elements[1].kind(), ElementKind::Text);
    }

    #[test]
    fn test_from_json_defaults_missing_dimensions() {
        let design = Design::from_json(r#"{"id": "0", "elements": []}"#).unwrap();
        assert_eq!(design.dimensions, Dimensions::default());
        assert!(design.elements.is_empty());
    }

    #[test]
    fn test_from_json_unsupported_element() {
        let json = r#"{"elements": [{"type": "rect", "attrs": {"x": 0, "y": 0, "width": 1, "height": 1, "color": "red"}}, {"type": "star", "attrs": {}}]}"#;
        let err = Design::from_json(json).unwrap_err();
        assert!(matches!(err, Error::UnsupportedElementType(ref t) if t == "star"));
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = Design::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let design = Design::new("3", Dimensions::new(300.0, 200.0))
            .with_element(Rectangle::default())
            .with_element(TextLabel::default());
        let json = design.to_json().unwrap();
        assert_eq!(Design::from_json(&json).unwrap(), design);
    }

    #[test]
    fn test_from_json_accepts_numeric_string_dimensions() {
        let json = r#"{"dimensions": {"width": "750", "height": " 400.5 "}, "elements": []}"#;
        let design = Design::from_json(json).unwrap();
        assert_eq!(design.dimensions, Dimensions::new(750.0, 400.5));

        let err = Design::from_json(r#"{"dimensions": {"width": "wide", "height": 1}}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_to_json_rejects_non_finite_numbers() {
        let design = Design::new("0", Dimensions::default()).with_element(Rectangle {
            x: f64::NAN,
            ..Rectangle::default()
        });
        let err = design.to_json().unwrap_err();
        assert!(matches!(err, Error::InvalidElement { ref kind, .. } if kind == "rect"));
    }
}
