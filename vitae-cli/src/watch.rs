//! `vitae watch`: re-render a document whenever it changes on disk.
//!
//! File events come from a `notify` watcher on the document's directory and are forwarded
//! into a channel. Every relevant event reschedules a single debounced render, so a burst of
//! saves produces one render of the final content.

use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use vitae_babel::publish::{publish_with, PublishArtifact, PublishSpec};
use vitae_babel::{Debouncer, FormatRegistry, RenderSession};
use vitae_config::VitaeConfig;

#[derive(Clone)]
struct RenderJob {
    session: RenderSession,
    format: String,
    source: PathBuf,
    output: Option<PathBuf>,
}

impl RenderJob {
    fn run(&self) {
        let text = match fs::read_to_string(&self.source) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {}: {}", self.source.display(), e);
                return;
            }
        };
        let mut session = self.session.clone();
        let pass = match session.render(text) {
            Ok(pass) => pass,
            Err(e) => {
                eprintln!("Error parsing {}: {}", self.source.display(), e);
                return;
            }
        };
        for diagnostic in &pass.diagnostics {
            log::warn!("{}", diagnostic);
        }

        let registry = FormatRegistry::with_defaults();
        let spec = PublishSpec::new(&pass, &self.format);
        let spec = match &self.output {
            Some(path) => spec.with_output_path(path),
            None => {
                let dir = self.source.parent().unwrap_or_else(|| Path::new("."));
                spec.with_output_dir(dir, &registry)
            }
        };
        match publish_with(&registry, spec) {
            Ok(result) => {
                if let PublishArtifact::File(path) = result.artifact {
                    eprintln!("Rendered {}", path.display());
                }
            }
            Err(e) => eprintln!("Render error: {}", e),
        }
    }
}

/// Whether `event` is a write to `target`.
fn touches(event: &Event, target: &Path) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| path == target || path.file_name() == target.file_name())
}

pub async fn run(
    config: VitaeConfig,
    path: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), notify::Error> {
    let path = path.canonicalize()?;
    let watch_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;
    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    let job = RenderJob {
        session: config.session(),
        format: config.export.default_format.clone(),
        source: path.clone(),
        output,
    };
    job.run();

    let mut debouncer = Debouncer::new(config.watch.debounce());
    eprintln!("Watching {} (Ctrl-C to stop)", path.display());

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                if touches(&event, &path) {
                    log::debug!("change detected: {:?}", event.kind);
                    let job = job.clone();
                    debouncer.schedule(move || job.run());
                }
            }
            _ = tokio::signal::ctrl_c() => {
                debouncer.cancel();
                break;
            }
        }
    }
    Ok(())
}
