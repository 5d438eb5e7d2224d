//! Command handlers.
//!
//! Each handler translates its arguments into calls on the core services and
//! renders the result.  No business logic lives here.

pub mod completions;
pub mod demo;
pub mod sort;
pub mod stats;
pub mod validate;

use std::path::Path;

use tracing::{debug, instrument};

use carlot_adapters::{JsonFileSource, discover_json_files};
use carlot_core::application::{LoadReport, load_cars};

use crate::{
    cli::SourceArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, Tone},
};

/// Decide which files to read: explicit arguments first, then the
/// configured directory, then the configured file list.
pub fn resolve_sources(args: &SourceArgs, config: &AppConfig) -> CliResult<Vec<String>> {
    let sources = if !args.files.is_empty() {
        args.files.clone()
    } else if let Some(dir) = &config.data.dir {
        discover_json_files(dir)?
            .iter()
            .map(|path| path.display().to_string())
            .collect()
    } else {
        config.data.files.clone()
    };

    if sources.is_empty() {
        return Err(CliError::InvalidInput {
            message: match &config.data.dir {
                Some(dir) if args.files.is_empty() => {
                    format!("no JSON files under {}", dir.display())
                }
                _ => "no record files to load".into(),
            },
        });
    }
    Ok(sources)
}

/// Load `sources` with the configured field patterns.
#[instrument(skip_all, fields(sources = sources.len()))]
pub fn load(sources: &[String], config: &AppConfig) -> CliResult<LoadReport> {
    let patterns = &config.patterns;
    let report = load_cars(
        Box::new(JsonFileSource::new()),
        sources,
        &patterns.model,
        &patterns.components,
        &patterns.tyre_model,
    )?;
    debug!(cars = report.cars().len(), "Sources loaded");
    Ok(report)
}

/// One warning line per rejected record and unreadable source.
pub fn report_problems(report: &LoadReport, output: &OutputManager) -> CliResult<()> {
    for rejected in report.rejected() {
        output.mark(
            Tone::Warning,
            &format!("{}: rejected ({})", file_label(&rejected.source), rejected.errors),
        )?;
    }
    for failure in report.failures() {
        output.mark(
            Tone::Warning,
            &format!("{}: skipped ({})", file_label(&failure.source), failure.error),
        )?;
    }
    Ok(())
}

fn file_label(source: &str) -> &str {
    Path::new(source)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source)
}
