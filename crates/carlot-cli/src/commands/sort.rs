//! Implementation of `carlot sort`.

use tracing::{debug, instrument};

use carlot_core::{
    application::{CarsService, SortAttribute},
    error::CarlotError,
};

use crate::{
    cli::{SortArgs, normalize_attribute},
    commands::{load, report_problems, resolve_sources},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute `carlot sort`.
#[instrument(skip_all, fields(attribute = %args.attribute, descending = args.descending))]
pub fn execute(args: SortArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let attribute = normalize_attribute(&args.attribute)
        .parse::<SortAttribute>()
        .map_err(CarlotError::from)?;

    let sources = resolve_sources(&args.sources, &config)?;
    let report = load(&sources, &config)?;
    report_problems(&report, &output)?;

    let sorted = CarsService::from(report).sort_cars(attribute, args.descending);
    debug!(cars = sorted.len(), "Sorted");

    if output.is_json() {
        return output.json(&sorted);
    }

    let order = if args.descending { "descending" } else { "ascending" };
    output.header(&format!("Sorted by {attribute}, {order}"))?;
    for car in &sorted {
        output.print(&format!("  {car}"))?;
    }
    Ok(())
}
