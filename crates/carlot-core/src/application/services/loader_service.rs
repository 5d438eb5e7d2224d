//! Loader Service - turns raw sources into a de-duplicated car collection.
//!
//! For every source, in order:
//! 1. Read the raw record through the [`RecordSource`] port
//! 2. Validate it with the injected [`RecordValidator`]
//! 3. Build a [`Car`] and keep it unless an equal car is already loaded
//!
//! A source that cannot be read, or a record that fails validation, is
//! recorded in the [`LoadReport`] and the batch carries on.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::RecordSource,
    domain::{Car, CarValidator, RecordValidator, ValidationErrors},
    error::{CarlotError, CarlotResult},
};

/// A record that was read but failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub source: String,
    pub errors: ValidationErrors,
}

/// A source that could not produce a record.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub source: String,
    pub error: CarlotError,
}

/// Outcome of a batch load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    cars: Vec<Car>,
    rejected: Vec<RejectedRecord>,
    failures: Vec<SourceFailure>,
    duplicates: usize,
}

impl LoadReport {
    /// Loaded cars, in first-seen source order, without duplicates.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    pub fn failures(&self) -> &[SourceFailure] {
        &self.failures
    }

    /// Number of valid records dropped because an equal car was already loaded.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// `true` when no record was rejected and no source failed.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.failures.is_empty()
    }

    pub fn into_cars(self) -> Vec<Car> {
        self.cars
    }
}

/// Service that loads validated cars from a record source.
pub struct LoaderService {
    source: Box<dyn RecordSource>,
    validator: Box<dyn RecordValidator>,
}

impl LoaderService {
    /// Create a new loader with the given source adapter and rule set.
    pub fn new(source: Box<dyn RecordSource>, validator: Box<dyn RecordValidator>) -> Self {
        Self { source, validator }
    }

    /// Load every source into a [`LoadReport`].
    ///
    /// Never fails as a whole: per-source problems end up in
    /// [`LoadReport::failures`] and [`LoadReport::rejected`].
    #[instrument(skip_all, fields(sources = sources.len()))]
    pub fn load<S: AsRef<str>>(&self, sources: &[S]) -> LoadReport {
        let mut report = LoadReport::default();
        let mut seen = HashSet::new();

        for source in sources {
            let source = source.as_ref();

            let record = match self.source.read(source) {
                Ok(record) => record,
                Err(error) => {
                    warn!(source, error = %error, "Skipping unreadable source");
                    report.failures.push(SourceFailure {
                        source: source.to_string(),
                        error,
                    });
                    continue;
                }
            };

            let (valid, errors) = self.validator.validate(&record).into_parts();
            if !valid {
                warn!(source, errors = %errors, "Record rejected");
                report.rejected.push(RejectedRecord {
                    source: source.to_string(),
                    errors,
                });
                continue;
            }

            let car = match Car::from_record(&record) {
                Ok(car) => car,
                Err(error) => {
                    // The injected validator let through a record the domain cannot build.
                    warn!(source, error = %error, "Record passed validation but cannot be built");
                    report.failures.push(SourceFailure {
                        source: source.to_string(),
                        error: error.into(),
                    });
                    continue;
                }
            };

            if seen.insert(car.clone()) {
                debug!(source, model = car.model(), "Car loaded");
                report.cars.push(car);
            } else {
                debug!(source, "Duplicate car skipped");
                report.duplicates += 1;
            }
        }

        info!(
            loaded = report.cars.len(),
            rejected = report.rejected.len(),
            failed = report.failures.len(),
            duplicates = report.duplicates,
            "Load finished"
        );
        report
    }
}

/// Compile the three field patterns and load `sources` in one call.
///
/// Fails only if a pattern does not compile.
pub fn load_cars<S: AsRef<str>>(
    source: Box<dyn RecordSource>,
    sources: &[S],
    model_regex: &str,
    components_regex: &str,
    tyre_model_regex: &str,
) -> CarlotResult<LoadReport> {
    let validator = CarValidator::new(model_regex, components_regex, tyre_model_regex)?;
    Ok(LoaderService::new(source, Box::new(validator)).load(sources))
}
