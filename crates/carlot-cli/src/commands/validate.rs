//! Implementation of `carlot validate`.
//!
//! Reports a verdict per source and fails with exit code 2 when anything
//! was rejected or unreadable.

use serde::Serialize;
use tracing::instrument;

use carlot_core::{application::LoadReport, domain::ValidationErrors};

use crate::{
    cli::SourceArgs,
    commands::{load, resolve_sources},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, Tone},
};

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Verdict<'a> {
    Valid,
    Rejected { errors: &'a ValidationErrors },
    Unreadable { error: String },
}

#[derive(Debug, Serialize)]
struct SourceVerdict<'a> {
    source: &'a str,
    #[serde(flatten)]
    verdict: Verdict<'a>,
}

/// Execute `carlot validate`.
#[instrument(skip_all)]
pub fn execute(args: SourceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let sources = resolve_sources(&args, &config)?;
    let report = load(&sources, &config)?;
    let verdicts = verdicts(&sources, &report);

    if output.is_json() {
        output.json(&serde_json::json!({
            "sources": verdicts,
            "loaded": report.cars().len(),
            "duplicates": report.duplicates(),
        }))?;
    } else {
        for SourceVerdict { source, verdict } in &verdicts {
            match verdict {
                Verdict::Valid => output.mark(Tone::Success, &format!("{source}: valid"))?,
                Verdict::Rejected { errors } => {
                    output.mark(Tone::Failure, &format!("{source}: rejected"))?;
                    for (field, messages) in errors.iter() {
                        for message in messages {
                            output.print(&format!("    {field}: {message}"))?;
                        }
                    }
                }
                Verdict::Unreadable { error } => {
                    output.mark(Tone::Failure, &format!("{source}: unreadable ({error})"))?;
                }
            }
        }
        output.mark(
            Tone::Info,
            &format!(
                "{} car(s) loaded, {} duplicate(s) skipped",
                report.cars().len(),
                report.duplicates()
            ),
        )?;
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::RecordsRejected {
            rejected: report.rejected().len(),
            failed: report.failures().len(),
        })
    }
}

/// One verdict per requested source, in request order.
fn verdicts<'a>(sources: &'a [String], report: &'a LoadReport) -> Vec<SourceVerdict<'a>> {
    sources
        .iter()
        .map(|source| {
            let verdict = if let Some(rejected) =
                report.rejected().iter().find(|r| &r.source == source)
            {
                Verdict::Rejected {
                    errors: &rejected.errors,
                }
            } else if let Some(failure) = report.failures().iter().find(|f| &f.source == source) {
                Verdict::Unreadable {
                    error: failure.error.to_string(),
                }
            } else {
                Verdict::Valid
            };
            SourceVerdict { source, verdict }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_adapters::MemorySource;
    use carlot_core::application::load_cars;

    const UPPER: &str = r"^[A-Z\s]+$";

    fn record(model: &str) -> String {
        format!(
            r#"{{"model": "{model}", "price": 10, "mileage": 1,
                "engine": {{"type": "LPG", "power": 60}},
                "carBody": {{"color": "WHITE", "type": "SEDAN", "components": []}},
                "wheel": {{"type": "SUMMER", "model": "NOKIAN", "size": 14}}}}"#
        )
    }

    #[test]
    fn verdicts_follow_request_order() {
        let source = MemorySource::new()
            .with("good", record("FIAT"))
            .with("bad", record("fiat"))
            .with("broken", "{");
        let sources: Vec<String> = ["bad", "good", "broken"].map(String::from).to_vec();
        let report = load_cars(Box::new(source), &sources, UPPER, UPPER, UPPER).unwrap();

        let verdicts = verdicts(&sources, &report);
        assert!(matches!(
            verdicts[0].verdict,
            Verdict::Rejected { errors } if errors.contains("model")
        ));
        assert!(matches!(verdicts[1].verdict, Verdict::Valid));
        assert!(matches!(verdicts[2].verdict, Verdict::Unreadable { .. }));
    }

    #[test]
    fn verdict_json_shape() {
        let mut errors = ValidationErrors::new();
        errors.add("price", "Price is not correct");
        let value = serde_json::to_value(SourceVerdict {
            source: "a.json",
            verdict: Verdict::Rejected { errors: &errors },
        })
        .unwrap();

        assert_eq!(value["source"], "a.json");
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["errors"]["price"][0], "Price is not correct");
    }
}
