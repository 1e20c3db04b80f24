//! Shared configuration loader for the vitae toolchain.
//!
//! `defaults/vitae.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`VitaeConfig`].
//!
//! A document's own `_meta` display preferences still win over whatever is configured here;
//! that merge happens per render pass in `vitae_babel::session`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use vitae_babel::session::FONT_SCHEMES;
use vitae_babel::{DisplaySettings, DocumentKind, HtmlTheme, RenderEngine, RenderSession};
use vitae_parser::vitae::Formatter;

const DEFAULT_TOML: &str = include_str!("../defaults/vitae.default.toml");

/// Top-level configuration consumed by vitae applications.
#[derive(Debug, Clone, Deserialize)]
pub struct VitaeConfig {
    pub render: RenderConfig,
    pub display: DisplaySettings,
    pub watch: WatchConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub theme: HtmlTheme,
    pub document_kind: DocumentKind,
    pub math: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    pub debounce_ms: u64,
}

impl WatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub default_format: String,
}

impl VitaeConfig {
    /// A render session seeded with these settings.
    pub fn session(&self) -> RenderSession {
        let formatter = if self.render.math {
            Formatter::new()
        } else {
            Formatter::without_math()
        };
        RenderSession::new()
            .with_theme(self.render.theme)
            .with_kind(self.render.document_kind)
            .with_display(self.display.clone())
            .with_engine(RenderEngine::new().with_formatter(formatter))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<VitaeConfig, ConfigError> {
        let config: VitaeConfig = self.builder.build()?.try_deserialize()?;
        if !FONT_SCHEMES.contains(&config.display.font_scheme) {
            return Err(ConfigError::Message(format!(
                "display.font_scheme must be between {} and {}, got {}",
                FONT_SCHEMES.start(),
                FONT_SCHEMES.end(),
                config.display.font_scheme
            )));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<VitaeConfig, ConfigError> {
    Loader::new().build()
}
