// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::enum_variant_names)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Design PDF
//!
//! Exports pixel-space vector designs to compact, single-page PDF documents.
//!
//! ## Features
//!
//! - **Shapes**: filled circles (four-segment Bézier approximation), filled
//!   rectangles, and single-line text labels in a built-in Type1 font
//! - **Geometry**: top-left pixel space flipped into bottom-left PDF user space,
//!   96 px/in converted to 72 pt/in, optionally truncated to whole points
//! - **Colors**: `#rrggbb` literals and CSS color names, falling back to black
//! - **Exact bookkeeping**: element `i` is object `i + 4`; every stream's
//!   `/Length` is its byte count
//!
//! The cross-reference section is deliberately minimal (free-list head only,
//! `startxref 0`). Viewers such as browsers and Preview rebuild it on load.
//!
//! ## Quick Start
//!
//! ```
//! use design_pdf::design::{Design, Dimensions};
//! use design_pdf::elements::{Circle, Rectangle, TextLabel};
//!
//! let design = Design::new("0", Dimensions::new(750.0, 400.0))
//!     .with_element(Rectangle { x: 0.0, y: 0.0, width: 100.0, height: 50.0, color: "#3366ff".into() })
//!     .with_element(Circle { x: 200.0, y: 40.0, radius: 60.0, color: "tomato".into() })
//!     .with_element(TextLabel { x: 20.0, y: 300.0, text: "Hello".into() });
//!
//! let pdf = design_pdf::export(&design)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok::<(), design_pdf::Error>(())
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input model
pub mod design;
pub mod elements;

// Geometry and color
pub mod color;
pub mod geometry;

// PDF object model and writing
pub mod object;
pub mod writer;

// Re-exports
pub use color::{Color, ColorResolver};
pub use config::ExportConfig;
pub use design::{Design, Dimensions};
pub use elements::{Circle, Element, ElementKind, Rectangle, TextLabel};
pub use error::{Error, Result};
pub use geometry::{px_to_pt, UnitPolicy};
pub use writer::{export, export_json, DesignExporter, PDF_MIME_TYPE};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
