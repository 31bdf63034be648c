//! PDF document assembly.
//!
//! Assembles a single-page PDF document from a design:
//! header, catalog, page tree, one content stream per element, a minimal
//! xref section and the trailer.
//!
//! The xref section only carries the free-list head entry and `startxref`
//! points at offset 0. Common viewers rebuild the table when it is short, so
//! per-object offsets are not computed.

use super::element_renderer::{ElementRenderer, FONT_RESOURCE};
use super::object_serializer::ObjectSerializer;
use super::EOL;
use crate::config::ExportConfig;
use crate::design::Design;
use crate::error::Result;
use crate::geometry::UnitConverter;
use crate::object::Object;

/// Media type for HTTP responses carrying exported documents.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Catalog object number.
pub const CATALOG_ID: u32 = 1;

/// Page tree root object number.
pub const PAGES_ID: u32 = 2;

/// The single page's object number.
pub const PAGE_ID: u32 = 3;

/// Object number of the first element's content stream.
///
/// Objects 0-3 are the free-list head, catalog, pages and page.
pub const FIRST_ELEMENT_OBJECT: u32 = 4;

/// Comment bytes after the header marking the file as binary.
const BINARY_MARKER: &[u8] = &[0xC2, 0xA5, 0xC2, 0xB1, 0xC3, 0xAB];

/// Object number of the content stream for the element at `index`.
pub fn element_object_id(index: usize) -> u32 {
    FIRST_ELEMENT_OBJECT + index as u32
}

/// Assembles designs into complete PDF documents.
#[derive(Debug, Clone, Default)]
pub struct DesignExporter {
    config: ExportConfig,
}

impl DesignExporter {
    /// Create an exporter with default config.
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    /// Create an exporter with custom config.
    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Build the complete PDF document for `design`.
    pub fn export(&self, design: &Design) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::new();
        let units = UnitConverter::new(self.config.unit_policy);
        let renderer = ElementRenderer::new(units);
        let page_height = design.dimensions.height;

        let streams: Vec<(u32, Vec<u8>)> = design
            .elements
            .iter()
            .enumerate()
            .map(|(i, element)| (element_object_id(i), renderer.render(element, page_height)))
            .collect();
        let size = FIRST_ELEMENT_OBJECT as usize + streams.len();

        let mut output = Vec::new();

        // Header
        push_line(&mut output, format!("%PDF-{}", self.config.version).as_bytes());
        let mut marker = vec![b'%'];
        marker.extend_from_slice(BINARY_MARKER);
        push_line(&mut output, &marker);

        // Catalog
        let catalog = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(PAGES_ID)),
        ]);
        output.extend_from_slice(&serializer.serialize_indirect(CATALOG_ID, &catalog));

        // Page tree
        let pages = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", ObjectSerializer::array(vec![ObjectSerializer::reference(PAGE_ID)])),
            ("Count", ObjectSerializer::integer(1)),
            (
                "MediaBox",
                ObjectSerializer::rect(
                    0.0,
                    0.0,
                    units.to_pt(design.dimensions.width),
                    units.to_pt(design.dimensions.height),
                ),
            ),
        ]);
        output.extend_from_slice(&serializer.serialize_indirect(PAGES_ID, &pages));

        // Page
        let contents: Vec<Object> = streams
            .iter()
            .map(|(id, _)| ObjectSerializer::reference(*id))
            .collect();
        let page = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Page")),
            ("Parent", ObjectSerializer::reference(PAGES_ID)),
            ("Resources", self.resources()),
            ("Contents", ObjectSerializer::array(contents)),
        ]);
        output.extend_from_slice(&serializer.serialize_indirect(PAGE_ID, &page));

        // Element content streams
        for (id, body) in &streams {
            output.extend_from_slice(&serializer.serialize_stream(*id, body));
        }

        // Cross-reference section: free-list head only
        push_line(&mut output, b"xref");
        push_line(&mut output, format!("0 {}", size).as_bytes());
        push_line(&mut output, b"0000000000 65535 f ");

        // Trailer
        let trailer = ObjectSerializer::dict(vec![
            ("Root", ObjectSerializer::reference(CATALOG_ID)),
            ("Size", ObjectSerializer::integer(size as i64)),
        ]);
        push_line(&mut output, b"trailer");
        push_line(&mut output, &serializer.serialize(&trailer));
        push_line(&mut output, b"startxref");
        push_line(&mut output, b"0");
        push_line(&mut output, b"%%EOF");

        log::debug!(
            "exported design {:?}: {} elements, {} objects, {} bytes",
            design.id,
            streams.len(),
            size,
            output.len()
        );
        Ok(output)
    }

    /// Export and write the PDF to a file.
    pub fn save(&self, design: &Design, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.export(design)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Page resources: the label font bound to `/F1`.
    fn resources(&self) -> Object {
        let font = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Font")),
            ("Subtype", ObjectSerializer::name("Type1")),
            ("BaseFont", ObjectSerializer::name(&self.config.base_font)),
        ]);
        ObjectSerializer::dict(vec![("Font", ObjectSerializer::dict(vec![(FONT_RESOURCE, font)]))])
    }
}

fn push_line(output: &mut Vec<u8>, line: &[u8]) {
    output.extend_from_slice(line);
    output.extend_from_slice(EOL);
}

/// Export a design with the default configuration.
pub fn export(design: &Design) -> Result<Vec<u8>> {
    DesignExporter::new().export(design)
}

/// Parse a design from its JSON record form and export it.
///
/// Any element with an unknown tag fails the whole call with
/// [`crate::Error::UnsupportedElementType`].
pub fn export_json(json: &str) -> Result<Vec<u8>> {
    let design = Design::from_json(json)?;
    export(&design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Dimensions;
    use crate::elements::{Element, ElementKind, Rectangle};
    use crate::geometry::UnitPolicy;

    fn sample_design() -> Design {
        Design::new("0", Dimensions::new(750.0, 400.0))
            .with_element(Element::new(ElementKind::Rect))
            .with_element(Element::new(ElementKind::Text))
    }

    fn to_string(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).to_string()
    }

    #[test]
    fn test_header_and_binary_marker() {
        let bytes = export(&sample_design()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.1\r\n%\xC2\xA5\xC2\xB1\xC3\xAB\r\n"));
        assert!(bytes.ends_with(b"%%EOF\r\n"));
    }

    #[test]
    fn test_document_structure() {
        let content = to_string(&export(&sample_design()).unwrap());
        assert!(content.contains("1 0 obj\r\n<< /Type /Catalog /Pages 2 0 R >>\r\nendobj"));
        assert!(content.contains(
            "2 0 obj\r\n<< /Type /Pages /Kids [3 0 R] /Count 1 /MediaBox [0 0 562.5 300] >>"
        ));
        assert!(content.contains("/Parent 2 0 R"));
        assert!(content.contains(
            "/Resources << /Font << /F1 << /Type /Font /Subtype /Type1 /BaseFont /Times-Roman >> >> >>"
        ));
        assert!(content.contains("/Contents [4 0 R 5 0 R]"));
        assert!(content.contains("4 0 obj\r\n"));
        assert!(content.contains("5 0 obj\r\n"));
        assert!(!content.contains("6 0 obj"));
    }

    #[test]
    fn test_xref_and_trailer() {
        let content = to_string(&export(&sample_design()).unwrap());
        assert!(content.contains("xref\r\n0 6\r\n0000000000 65535 f \r\n"));
        assert!(content.contains("trailer\r\n<< /Root 1 0 R /Size 6 >>\r\n"));
        assert!(content.ends_with("startxref\r\n0\r\n%%EOF\r\n"));
    }

    #[test]
    fn test_empty_design() {
        let content = to_string(&export(&Design::default()).unwrap());
        assert!(content.contains("/Contents []"));
        assert!(content.contains("/Size 4"));
        assert!(content.contains("xref\r\n0 4\r\n"));
    }

    #[test]
    fn test_element_object_ids() {
        assert_eq!(element_object_id(0), 4);
        assert_eq!(element_object_id(9), 13);
    }

    #[test]
    fn test_with_config() {
        let config = ExportConfig::new()
            .with_version("1.4")
            .with_unit_policy(UnitPolicy::Truncate)
            .with_base_font("Helvetica");
        let design = Design::new("1", Dimensions::new(750.0, 401.0)).with_element(Rectangle {
            x: 1.0,
            y: 1.0,
            width: 10.0,
            height: 10.0,
            color: "red".to_string(),
        });
        let content = to_string(&DesignExporter::with_config(config).export(&design).unwrap());
        assert!(content.starts_with("%PDF-1.4\r\n"));
        assert!(content.contains("/BaseFont /Helvetica"));
        // 401 px = 300.75 pt, truncated
        assert!(content.contains("/MediaBox [0 0 562 300]"));
        // 401 - 1 - 10 = 390 px = 292.5 pt, truncated
        assert!(content.contains("0 292 7 7 re"));
    }

    #[test]
    fn test_export_json_unsupported_element() {
        let json = r#"{"id": "0", "elements": [{"type": "hexagon", "attrs": {}}]}"#;
        let err = export_json(json).unwrap_err();
        assert!(matches!(err, crate::Error::UnsupportedElementType(ref t) if t == "hexagon"));
    }

    #[test]
    fn test_deterministic() {
        let design = sample_design();
        assert_eq!(export(&design).unwrap(), export(&design).unwrap());
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(PDF_MIME_TYPE, "application/pdf");
    }
}
