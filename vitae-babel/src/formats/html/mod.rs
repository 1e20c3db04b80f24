//! HTML format implementation
//!
//! Wraps the engine markup into a standalone page: baseline stylesheet, the theme expressed as
//! CSS custom properties, the page's display settings and a layout container.
//!
//! | theme          | layout        | heading font      | body font        |
//! |----------------|---------------|-------------------|------------------|
//! | `professional` | single column | Times New Roman   | Times New Roman  |
//! | `modern`       | two columns   | Arial             | Arial            |
//! | `creative`     | sidebar       | Georgia           | Trebuchet MS     |
//! | `minimal`      | single column | Helvetica         | Helvetica        |
//! | `fashion`      | two columns   | Playfair Display  | Lato             |
//!
//! ```ignore
//! use vitae_babel::formats::html::HtmlFormat;
//! use vitae_babel::Format;
//!
//! let html = HtmlFormat.serialize(&pass)?;
//! ```

mod serializer;

pub use serializer::serialize_to_html;

use crate::error::FormatError;
use crate::format::Format;
use crate::session::RenderPass;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlTheme {
    #[default]
    Professional,
    Modern,
    Creative,
    Minimal,
    Fashion,
}

/// Theme colours, emitted as `--theme-*` custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub background: &'static str,
    pub divider: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    SingleColumn,
    TwoColumn,
    Sidebar,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::SingleColumn => "single-column",
            Layout::TwoColumn => "two-column",
            Layout::Sidebar => "sidebar",
        }
    }

    /// Declarations for the `.layout` container.
    pub fn css(self) -> &'static str {
        match self {
            Layout::SingleColumn => "display: block;",
            Layout::TwoColumn => "display: grid; grid-template-columns: 1fr 1fr; gap: 20px;",
            Layout::Sidebar => "display: grid; grid-template-columns: 300px 1fr; gap: 30px;",
        }
    }
}

impl HtmlTheme {
    pub const ALL: [HtmlTheme; 5] = [
        HtmlTheme::Professional,
        HtmlTheme::Modern,
        HtmlTheme::Creative,
        HtmlTheme::Minimal,
        HtmlTheme::Fashion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HtmlTheme::Professional => "professional",
            HtmlTheme::Modern => "modern",
            HtmlTheme::Creative => "creative",
            HtmlTheme::Minimal => "minimal",
            HtmlTheme::Fashion => "fashion",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
    }

    pub fn palette(self) -> Palette {
        match self {
            HtmlTheme::Professional => Palette {
                primary: "#2c3e50",
                secondary: "#34495e",
                accent: "#3498db",
                text: "#000000",
                background: "#ffffff",
                divider: "#bdc3c7",
            },
            HtmlTheme::Modern => Palette {
                primary: "#1a1a1a",
                secondary: "#f5f5f5",
                accent: "#00d4ff",
                text: "#333333",
                background: "#ffffff",
                divider: "#e0e0e0",
            },
            HtmlTheme::Creative => Palette {
                primary: "#2d5016",
                secondary: "#6b8e23",
                accent: "#f4a460",
                text: "#ffffff",
                background: "#f9f7f4",
                divider: "#d4af37",
            },
            HtmlTheme::Minimal => Palette {
                primary: "#000000",
                secondary: "#f0f0f0",
                accent: "#666666",
                text: "#000000",
                background: "#ffffff",
                divider: "#dddddd",
            },
            HtmlTheme::Fashion => Palette {
                primary: "#c4b5a0",
                secondary: "#2d4a3d",
                accent: "#d4a574",
                text: "#1a1a1a",
                background: "#f5f1ed",
                divider: "#b8a89a",
            },
        }
    }

    /// (heading, body) font stacks.
    pub fn fonts(self) -> (&'static str, &'static str) {
        match self {
            HtmlTheme::Professional => ("'Times New Roman', serif", "'Times New Roman', serif"),
            HtmlTheme::Modern => ("Arial, sans-serif", "Arial, sans-serif"),
            HtmlTheme::Creative => ("Georgia, serif", "'Trebuchet MS', sans-serif"),
            HtmlTheme::Minimal => ("Helvetica, Arial, sans-serif", "Helvetica, Arial, sans-serif"),
            HtmlTheme::Fashion => ("'Playfair Display', serif", "Lato, sans-serif"),
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            HtmlTheme::Professional | HtmlTheme::Minimal => Layout::SingleColumn,
            HtmlTheme::Modern | HtmlTheme::Fashion => Layout::TwoColumn,
            HtmlTheme::Creative => Layout::Sidebar,
        }
    }
}

impl fmt::Display for HtmlTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Standalone HTML page. The theme comes from the render pass.
#[derive(Debug, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Standalone HTML page with embedded styles"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, pass: &RenderPass) -> Result<String, FormatError> {
        serialize_to_html(pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_format_name() {
        assert_eq!(HtmlFormat.name(), "html");
        assert!(HtmlFormat.supports_serialization());
        assert_eq!(HtmlFormat.file_extensions(), &["html", "htm"]);
    }

    #[test]
    fn theme_names_round_trip() {
        for theme in HtmlTheme::ALL {
            assert_eq!(HtmlTheme::from_name(theme.name()), Some(theme));
        }
        assert_eq!(HtmlTheme::from_name(" Modern "), Some(HtmlTheme::Modern));
        assert_eq!(HtmlTheme::from_name("neon"), None);
    }

    #[test]
    fn theme_deserializes_from_lowercase() {
        let theme: HtmlTheme = serde_yaml::from_str("fashion").unwrap();
        assert_eq!(theme, HtmlTheme::Fashion);
    }

    #[test]
    fn layouts() {
        assert_eq!(HtmlTheme::Creative.layout(), Layout::Sidebar);
        assert_eq!(HtmlTheme::Modern.layout().name(), "two-column");
        assert!(Layout::Sidebar.css().contains("300px 1fr"));
    }
}
