//! Command-line interface for vitae
//! Renders YAML résumé and cover-letter documents into HTML (or JSON), checks them against
//! their declared section order and re-renders them on change.
//!
//! Usage:
//!   vitae render `<path>` [--to `<format>`] [--output `<file>`] [--theme `<theme>`]
//!   vitae check `<path>`                                  - Diagnostics and section outcomes
//!   vitae watch `<path>` [--output `<file>`]              - Re-render whenever the file changes
//!   vitae new --preset `<name>` [`<path>`]                - Start from a starter document
//!   vitae themes | vitae formats                          - List what is available

mod watch;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::path::{Path, PathBuf};
use vitae_babel::presets::{list_presets, preset};
use vitae_babel::publish::{publish_with, PublishArtifact, PublishSpec};
use vitae_babel::{Format, FormatRegistry, HtmlTheme, RenderPass, SectionOutcome};
use vitae_config::{Loader, VitaeConfig};
use vitae_parser::vitae::Severity;

/// Picked up from the working directory when no `--config` is given.
const LOCAL_CONFIG: &str = "vitae.toml";

fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the YAML document")
            .required(true)
            .index(1)
    };
    let theme_arg = || {
        Arg::new("theme")
            .long("theme")
            .short('t')
            .help("Theme (professional, modern, creative, minimal, fashion)")
    };
    let kind_arg = || {
        Arg::new("kind")
            .long("kind")
            .short('k')
            .help("Document kind (resume, cover-letter, portfolio)")
    };
    let output_arg = || {
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Write to this file instead of stdout")
    };

    Command::new("vitae")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render YAML résumés and cover letters to styled HTML")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document")
                .arg(path_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('f')
                        .help("Output format (default from configuration)"),
                )
                .arg(output_arg())
                .arg(theme_arg())
                .arg(kind_arg())
                .arg(
                    Arg::new("no-math")
                        .long("no-math")
                        .action(ArgAction::SetTrue)
                        .help("Show $$...$$ spans as flagged source instead of MathML"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a document; exits non-zero on error diagnostics")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("watch")
                .about("Re-render a document whenever it changes")
                .arg(path_arg())
                .arg(output_arg().help("Output file (default: export name next to the source)"))
                .arg(theme_arg())
                .arg(kind_arg()),
        )
        .subcommand(
            Command::new("new")
                .about("Write a starter document")
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .short('p')
                        .default_value("empty-resume")
                        .help("Preset name (see --list)"),
                )
                .arg(Arg::new("path").help("Destination file (default: stdout)").index(1))
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Overwrite an existing file"),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .action(ArgAction::SetTrue)
                        .help("List available presets"),
                ),
        )
        .subcommand(Command::new("themes").about("List available themes"))
        .subcommand(Command::new("formats").about("List available output formats"))
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();
    // Global flags are propagated to the subcommand's matches wherever they were written
    let verbosity = matches
        .subcommand()
        .map_or(matches.get_count("verbose"), |(_, sub)| sub.get_count("verbose"));
    init_logging(verbosity);

    match matches.subcommand() {
        Some(("render", sub)) => handle_render_command(sub),
        Some(("check", sub)) => handle_check_command(sub),
        Some(("watch", sub)) => {
            let mut config = load_config(sub);
            let registry = FormatRegistry::with_defaults();
            config.export.default_format = output_format(&config, sub, &registry);
            let path = PathBuf::from(required(sub, "path"));
            let output = sub.get_one::<String>("output").map(PathBuf::from);
            if let Err(err) = watch::run(config, path, output).await {
                eprintln!("Watch error: {}", err);
                std::process::exit(1);
            }
        }
        Some(("new", sub)) => handle_new_command(sub),
        Some(("themes", _)) => handle_themes_command(),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!("subcommand is required"),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_else(|| {
            eprintln!("Missing required argument <{}>", id);
            std::process::exit(2);
        })
}

/// Defaults, then `--config` (or `./vitae.toml` if present), then command line flags.
fn load_config(sub: &ArgMatches) -> VitaeConfig {
    let mut loader = Loader::new();
    loader = match sub.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file(LOCAL_CONFIG),
    };

    let overrides = [
        ("render.theme", "theme"),
        ("render.document_kind", "kind"),
        ("export.default_format", "to"),
    ];
    for (key, id) in overrides {
        let value = sub
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .map(String::as_str);
        if let Some(value) = value {
            loader = loader
                .set_override(key, value)
                .unwrap_or_else(|e| config_error(e));
        }
    }
    if sub.try_get_one::<bool>("no-math").ok().flatten() == Some(&true) {
        loader = loader
            .set_override("render.math", false)
            .unwrap_or_else(|e| config_error(e));
    }

    loader.build().unwrap_or_else(|e| config_error(e))
}

fn config_error(err: config::ConfigError) -> ! {
    eprintln!("Configuration error: {}", err);
    std::process::exit(1);
}

/// `--to` wins; otherwise the `--output` extension picks the format, falling back to the
/// configured default.
fn output_format(config: &VitaeConfig, sub: &ArgMatches, registry: &FormatRegistry) -> String {
    let explicit = sub.try_get_one::<String>("to").ok().flatten();
    let output = sub.try_get_one::<String>("output").ok().flatten();
    match (explicit, output) {
        (None, Some(output)) => Path::new(output)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| registry.for_extension(ext))
            .map(|format| format.name().to_string())
            .unwrap_or_else(|| config.export.default_format.clone()),
        _ => config.export.default_format.clone(),
    }
}

fn render_file(config: &VitaeConfig, path: &Path) -> RenderPass {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path.display(), e);
        std::process::exit(1);
    });
    config.session().render(source).unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {}", path.display(), e);
        std::process::exit(1);
    })
}

fn print_diagnostics(pass: &RenderPass) {
    for diagnostic in &pass.diagnostics {
        if diagnostic.severity > Severity::Info {
            eprintln!("{}", diagnostic);
        }
    }
}

/// Handle the render command
fn handle_render_command(sub: &ArgMatches) {
    let config = load_config(sub);
    let path = Path::new(required(sub, "path"));
    let pass = render_file(&config, path);
    print_diagnostics(&pass);

    let registry = FormatRegistry::with_defaults();
    let format = output_format(&config, sub, &registry);
    let mut spec = PublishSpec::new(&pass, &format);
    if let Some(output) = sub.get_one::<String>("output") {
        spec = spec.with_output_path(output);
    }

    match publish_with(&registry, spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => print!("{}", text),
            PublishArtifact::File(path) => eprintln!("Wrote {}", path.display()),
        },
        Err(e) => {
            eprintln!("Render error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in registry.list_formats() {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(sub: &ArgMatches) {
    let config = load_config(sub);
    let pass = render_file(&config, Path::new(required(sub, "path")));

    for diagnostic in &pass.diagnostics {
        println!("{}", diagnostic);
    }
    for outcome in &pass.output.outcomes {
        match outcome {
            SectionOutcome::Rendered { key, kind } => {
                println!("  ok      {} ({})", key, kind.type_name())
            }
            SectionOutcome::Skipped { key, reason } => println!("  skipped {}: {}", key, reason),
            SectionOutcome::Failed { key, error } => println!("  failed  {}: {}", key, error),
        }
    }

    if pass.has_errors() {
        std::process::exit(1);
    }
}

/// Handle the new command
fn handle_new_command(sub: &ArgMatches) {
    if sub.get_flag("list") {
        println!("Available presets:\n");
        for (name, description) in list_presets() {
            println!("  {}", name);
            println!("    {}", description);
            println!();
        }
        return;
    }

    let name = required(sub, "preset");
    let Some(source) = preset(name) else {
        eprintln!("Unknown preset '{}'", name);
        eprintln!("\nAvailable presets:");
        for (name, _) in list_presets() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    };

    match sub.get_one::<String>("path") {
        None => print!("{}", source),
        Some(path) => {
            let path = Path::new(path);
            if path.exists() && !sub.get_flag("force") {
                eprintln!("{} already exists (use --force to overwrite)", path.display());
                std::process::exit(1);
            }
            if let Err(e) = fs::write(path, source) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            eprintln!("Wrote {}", path.display());
        }
    }
}

/// Handle the themes command
fn handle_themes_command() {
    println!("Available themes:\n");
    for theme in HtmlTheme::ALL {
        let (heading, body) = theme.fonts();
        println!("  {}", theme);
        println!(
            "    {} layout, headings in {}, body in {}",
            theme.layout().name(),
            heading,
            body
        );
        println!();
    }
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
