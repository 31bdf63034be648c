//! Configuration for PDF export.

use crate::geometry::UnitPolicy;

/// Default PDF header version tag.
pub const DEFAULT_PDF_VERSION: &str = "1.1";

/// Default built-in Type1 font bound to the `/F1` resource.
pub const DEFAULT_BASE_FONT: &str = "Times-Roman";

/// Export configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// PDF version written into the header (e.g., "1.1")
    pub version: String,

    /// How pixel measurements are converted to points.
    pub unit_policy: UnitPolicy,

    /// Base-14 font used for text labels.
    pub base_font: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            version: DEFAULT_PDF_VERSION.to_string(),
            unit_policy: UnitPolicy::Precise,
            base_font: DEFAULT_BASE_FONT.to_string(),
        }
    }

    /// Set the header version tag.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the pixel-to-point rounding policy.
    pub fn with_unit_policy(mut self, policy: UnitPolicy) -> Self {
        self.unit_policy = policy;
        self
    }

    /// Set the built-in font used for text labels.
    pub fn with_base_font(mut self, font: impl Into<String>) -> Self {
        self.base_font = font.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.version, "1.1");
        assert_eq!(config.unit_policy, UnitPolicy::Precise);
        assert_eq!(config.base_font, "Times-Roman");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExportConfig::new()
            .with_version("1.4")
            .with_unit_policy(UnitPolicy::Truncate)
            .with_base_font("Helvetica");
        assert_eq!(config.version, "1.4");
        assert_eq!(config.unit_policy, UnitPolicy::Truncate);
        assert_eq!(config.base_font, "Helvetica");
    }
}
