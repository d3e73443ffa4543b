//! Application configuration.
//!
//! Centralizes all configuration used throughout the viewer. Deployment
//! settings are read from `assets/viewer.toml`, embedded at compile time
//! with `include_str!`; UI-only choices stay plain constants.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Embedded Assets (loaded at compile time)
// =============================================================================

/// Viewer settings shipped with the build.
pub const VIEWER_TOML: &str = include_str!("../assets/viewer.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "texview";

// =============================================================================
// Viewer Messages
// =============================================================================

/// Inline messages substituted into the code area.
pub mod messages {
    /// Placeholder when the listing has no source files.
    pub const NO_SOURCE_FILES: &str = "// No source files found.";
    /// Prefix for listing failures (followed by the reason).
    pub const LISTING_ERROR_PREFIX: &str = "// Error loading file list: ";
    /// Prefix for file failures (followed by the reason).
    pub const FILE_ERROR_PREFIX: &str = "// Error loading file: ";
    /// Text of the PDF error placeholder.
    pub const PDF_UNAVAILABLE: &str = "PDF preview not available.";
}

// =============================================================================
// Viewer Configuration
// =============================================================================

/// Minimum pane widths enforced by the split-pane resizer (CSS pixels).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lower bound for either pane.
    pub min_pane_width: f64,
    /// Lower bound for the preview pane specifically.
    pub min_preview_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_pane_width: 200.0,
            min_preview_width: 415.0,
        }
    }
}

/// Syntax highlighting settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Name of a syntect default theme.
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

/// Deployment settings for the viewer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Path prefix under which project directories are served.
    pub projects_base: String,
    /// External editor URL; `{id}` is replaced with the project identifier.
    pub editor_url: String,
    /// Extensions (without dot) listed as source files.
    pub source_extensions: Vec<String>,
    /// PDF names tried in order before falling back to the first PDF.
    pub pdf_preference: Vec<String>,
    pub layout: LayoutConfig,
    pub highlight: HighlightConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            projects_base: "/projects".to_string(),
            editor_url: "https://tex.jonasjones.dev/project/{id}".to_string(),
            source_extensions: ["tex", "bib", "cls", "sty", "txt"]
                .into_iter()
                .map(String::from)
                .collect(),
            pdf_preference: vec!["output.pdf".to_string(), "main.pdf".to_string()],
            layout: LayoutConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration document. Missing keys take default values.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded configuration, falling back to defaults on error.
    pub fn load() -> Self {
        match Self::from_toml(VIEWER_TOML) {
            Ok(config) => config,
            Err(_err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Invalid viewer.toml, using defaults: {}", _err).into(),
                );
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source_extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "source_extensions must not be empty".to_string(),
            ));
        }
        if self.layout.min_pane_width < 0.0 || self.layout.min_preview_width < 0.0 {
            return Err(ConfigError::Invalid(
                "layout widths must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

static VIEWER_CONFIG: OnceLock<ViewerConfig> = OnceLock::new();

/// Get the viewer configuration (parsed once per page).
pub fn viewer_config() -> &'static ViewerConfig {
    VIEWER_CONFIG.get_or_init(ViewerConfig::load)
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
