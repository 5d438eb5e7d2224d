//! Implementation of `carlot stats`.

use tracing::instrument;

use carlot_core::{
    application::{CarsService, StatisticsAttribute},
    error::CarlotError,
};

use crate::{
    cli::{StatsArgs, normalize_attribute},
    commands::{load, report_problems, resolve_sources},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute `carlot stats`.
///
/// An empty collection has no statistics; that prints `no data` (or JSON
/// `null`) and still succeeds.
#[instrument(skip_all, fields(attribute = %args.attribute))]
pub fn execute(args: StatsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let attribute = normalize_attribute(&args.attribute)
        .parse::<StatisticsAttribute>()
        .map_err(CarlotError::from)?;

    let sources = resolve_sources(&args.sources, &config)?;
    let report = load(&sources, &config)?;
    report_problems(&report, &output)?;

    let statistics = CarsService::from(report).statistics(attribute);

    if output.is_json() {
        return output.json(&statistics);
    }

    output.header(&format!("Statistics for {attribute}"))?;
    match statistics {
        Some(stats) => output.print(&format!("  {stats}"))?,
        None => output.print("  no data")?,
    }
    Ok(())
}
