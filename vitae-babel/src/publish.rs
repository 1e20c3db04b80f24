//! Publishing: serialize a render pass and either hand it back or write it to disk.

use crate::error::FormatError;
use crate::registry::FormatRegistry;
use crate::session::RenderPass;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub pass: &'a RenderPass,
    pub format: &'a str,
    pub output: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(pass: &'a RenderPass, format: &'a str) -> Self {
        Self {
            pass,
            format,
            output: None,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Write into `dir` under the pass's export file name.
    pub fn with_output_dir(self, dir: impl AsRef<Path>, registry: &FormatRegistry) -> Self {
        let extension = registry
            .get(self.format)
            .ok()
            .and_then(|format| format.file_extensions().first().copied())
            .unwrap_or("txt");
        let path = dir.as_ref().join(self.pass.export_file_name(extension));
        self.with_output_path(path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with(&FormatRegistry::with_defaults(), spec)
}

pub fn publish_with(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let text = registry.serialize(spec.pass, spec.format)?;
    match spec.output {
        Some(path) => {
            write_to_path(&path, text.as_bytes())?;
            log::info!("wrote {}", path.display());
            Ok(PublishResult {
                artifact: PublishArtifact::File(path),
            })
        }
        None => Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        }),
    }
}

fn write_to_path(path: &Path, bytes: &[u8]) -> Result<(), FormatError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
