//! Shipcheck - deployment checklist renderer
//!
//! CLI entry point. With no arguments, prints the builtin checklist.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shipcheck::checklist::{self, Checklist};
use shipcheck::cli::render_lint_report;
use shipcheck::render::{render_json, ChecklistRenderer, DetailLevel, RenderOptions};

/// Deployment checklist renderer
///
/// Prints a phase-by-phase deployment checklist with commands, time
/// estimates and notes.
#[derive(Parser, Debug)]
#[command(name = "shipcheck", version, about)]
struct Cli {
    /// Checklist TOML file (the builtin checklist when omitted)
    #[arg(long, global = true)]
    checklist: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Which item fields the text report shows
    #[arg(long, value_enum, default_value_t = DetailLevel::Summary)]
    details: DetailLevel,

    /// When to use ANSI colors (report on stdout, lint on stderr)
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the checklist for duplicate ids, empty tasks and other mistakes
    Lint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable report
    Text,
    /// The full checklist model as JSON
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Color when the output stream is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

/// Decide whether to color output for the given choice.
fn resolve_color(choice: ColorChoice, is_tty: bool, no_color: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_tty && !no_color,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("SHIPCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Load the checklist from `path`, or the builtin one.
fn load_checklist(path: Option<&Path>) -> Result<Checklist> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading checklist");
            Checklist::from_path(path)
                .with_context(|| format!("Failed to load checklist from '{}'", path.display()))
        }
        None => checklist::builtin(),
    }
}

/// Treat a closed pipe (`shipcheck | head`) as a normal exit.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Resolve `choice` against the stream the command writes to and apply it
/// to every `colored` string printed afterwards.
fn apply_color(choice: ColorChoice, is_tty: bool) -> bool {
    let color = resolve_color(choice, is_tty, std::env::var_os("NO_COLOR").is_some());
    colored::control::set_override(color);
    color
}

fn run_render(cli: &Cli, checklist: &Checklist, color: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = match cli.format {
        Format::Text => {
            let renderer = ChecklistRenderer::new(RenderOptions {
                details: cli.details,
                color,
            });
            renderer.render(checklist, &mut out)
        }
        Format::Json => render_json(checklist, &mut out),
    };

    ignore_broken_pipe(result.and_then(|()| out.flush())).context("Failed to write report")
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let checklist = load_checklist(cli.checklist.as_deref())?;
    tracing::debug!(
        project = %checklist.project,
        phases = checklist.phases.len(),
        items = checklist.item_count(),
        "checklist ready"
    );

    match cli.command {
        Some(Command::Lint) => {
            apply_color(cli.color, io::stderr().is_terminal());
            let report = shipcheck::lint(&checklist);
            render_lint_report(&checklist.project, &report);
            if report.error_count() > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            let color = apply_color(cli.color, io::stdout().is_terminal());
            run_render(&cli, &checklist, color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_color() {
        assert!(resolve_color(ColorChoice::Always, false, true));
        assert!(!resolve_color(ColorChoice::Never, true, false));
        assert!(resolve_color(ColorChoice::Auto, true, false));
        assert!(!resolve_color(ColorChoice::Auto, true, true));
        assert!(!resolve_color(ColorChoice::Auto, false, false));
    }

    #[test]
    fn test_ignore_broken_pipe() {
        let broken = Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(ignore_broken_pipe(broken).is_ok());

        let other = Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(ignore_broken_pipe(other).is_err());
    }

    #[test]
    fn test_load_builtin_when_no_path() {
        let checklist = load_checklist(None).unwrap();
        assert_eq!(checklist.project, "iki-portfolio");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_checklist(Some(Path::new("/nonexistent/list.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/list.toml"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["shipcheck"]).unwrap();
        assert!(cli.checklist.is_none());
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.details, DetailLevel::Summary);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_lint_with_global_checklist() {
        let cli = Cli::try_parse_from(["shipcheck", "lint", "--checklist", "deploy.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Lint)));
        assert_eq!(cli.checklist, Some(PathBuf::from("deploy.toml")));
    }

    #[test]
    fn test_cli_lint_accepts_color() {
        let cli = Cli::try_parse_from(["shipcheck", "lint", "--color", "never"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Lint)));
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_apply_color_sets_override() {
        assert!(apply_color(ColorChoice::Always, false));
        assert!(!apply_color(ColorChoice::Never, true));
        colored::control::unset_override();
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["shipcheck", "--format", "yaml"]).is_err());
    }
}
