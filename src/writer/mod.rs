//! PDF writing module for exporting designs.
//!
//! ## Architecture
//!
//! ```text
//! Design (elements in pixel space)
//!     ↓
//! [DesignExporter] (assembles header, page tree, xref, trailer)
//!     ↓ per element
//! [ElementRenderer] (flip + circle approximation)
//!     ↓
//! [PathCommandBuilder] (px → pt, operators)
//!     ↓
//! [ObjectSerializer] (numbered stream objects with exact /Length)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Usage
//!
//! ```
//! use design_pdf::design::{Design, Dimensions};
//! use design_pdf::elements::{Element, ElementKind};
//! use design_pdf::writer::DesignExporter;
//!
//! let design = Design::new("0", Dimensions::new(750.0, 400.0))
//!     .with_element(Element::new(ElementKind::Circle));
//! let bytes = DesignExporter::new().export(&design)?;
//! assert!(bytes.starts_with(b"%PDF-1.1"));
//! # Ok::<(), design_pdf::Error>(())
//! ```

mod content_stream;
mod element_renderer;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{ContentStreamOp, PathCommandBuilder};
pub use element_renderer::{
    BezierSegment, CirclePath, ElementRenderer, FONT_RESOURCE, FONT_SIZE_PX, KAPPA,
};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{
    element_object_id, export, export_json, DesignExporter, CATALOG_ID, FIRST_ELEMENT_OBJECT,
    PAGES_ID, PAGE_ID, PDF_MIME_TYPE,
};

/// Line terminator used throughout the document.
pub(crate) const EOL: &[u8] = b"\r\n";
