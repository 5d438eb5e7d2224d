//! Implementation of `carlot demo`, the default command.
//!
//! Loads the records and walks through every query the service offers,
//! one section per query.

use bigdecimal::BigDecimal;
use serde_json::json;
use tracing::{info, instrument};

use carlot_core::{
    application::{CarsService, SortAttribute, StatisticsAttribute, StatisticsReport},
    domain::{Car, CarBodyType, EngineType, TyreType},
};

use crate::{
    cli::SourceArgs,
    commands::{load, report_problems, resolve_sources},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const REQUIRED_COMPONENT: &str = "BLUETOOTH";

/// Execute `carlot demo`.
#[instrument(skip_all)]
pub fn execute(args: SourceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let sources = resolve_sources(&args, &config)?;
    let report = load(&sources, &config)?;
    report_problems(&report, &output)?;

    let service = CarsService::from(report);
    info!(cars = service.len(), "Running queries");

    let queries = Queries::run(&service);
    if output.is_json() {
        return queries.write_json(&service, &output);
    }
    queries.write_human(&service, &output)
}

/// Results of every query, computed once and rendered either way.
struct Queries {
    by_power: Vec<Car>,
    combi_in_range: Vec<Car>,
    gasoline_models: Vec<String>,
    mileage: Option<StatisticsReport>,
    tyre_groups: Vec<(TyreType, Vec<Car>)>,
    with_component: Vec<Car>,
}

impl Queries {
    fn run(service: &CarsService) -> Self {
        Self {
            by_power: service.sort_cars(SortAttribute::EnginePower, true),
            combi_in_range: service.cars_by_body_and_price_range(
                CarBodyType::Combi,
                &BigDecimal::from(100),
                &BigDecimal::from(120),
            ),
            gasoline_models: service.model_names_with_engine_type(EngineType::Gasoline),
            mileage: service.statistics(StatisticsAttribute::Mileage),
            tyre_groups: service.cars_by_tyre_type(),
            with_component: service.cars_with_components(&[REQUIRED_COMPONENT]),
        }
    }

    fn write_human(&self, service: &CarsService, output: &OutputManager) -> CliResult<()> {
        output.cars(&format!("All cars ({})", service.len()), service.cars())?;
        output.cars("Sorted by engine power, descending", &self.by_power)?;
        output.cars("COMBI cars priced 100 to 120", &self.combi_in_range)?;

        output.header("GASOLINE models")?;
        if self.gasoline_models.is_empty() {
            output.print("  (none)")?;
        }
        for model in &self.gasoline_models {
            output.print(&format!("  {model}"))?;
        }

        output.header("Mileage statistics")?;
        match &self.mileage {
            Some(stats) => output.print(&format!("  {stats}"))?,
            None => output.print("  no data")?,
        }

        output.header("Mileage per car")?;
        let pairs = service.car_mileage_pairs();
        for car in service.cars() {
            if let Some(mileage) = pairs.get(car) {
                output.print(&format!("  {} -> {mileage}", car.model()))?;
            }
        }

        for (tyre_type, cars) in &self.tyre_groups {
            output.cars(&format!("{tyre_type} tyres"), cars)?;
        }

        output.cars(
            &format!("Cars with {REQUIRED_COMPONENT}"),
            &self.with_component,
        )?;
        Ok(())
    }

    fn write_json(&self, service: &CarsService, output: &OutputManager) -> CliResult<()> {
        let pairs = service.car_mileage_pairs();
        let mileage_pairs: Vec<_> = service
            .cars()
            .iter()
            .filter_map(|car| pairs.get(car).map(|m| json!({ "car": car, "mileage": m })))
            .collect();
        let tyre_groups: Vec<_> = self
            .tyre_groups
            .iter()
            .map(|(tyre_type, cars)| json!({ "tyreType": tyre_type, "cars": cars }))
            .collect();

        output.json(&json!({
            "cars": service.cars(),
            "sortedByEnginePower": self.by_power,
            "combiPriced100To120": self.combi_in_range,
            "gasolineModels": self.gasoline_models,
            "mileageStatistics": self.mileage,
            "mileagePairs": mileage_pairs,
            "tyreGroups": tyre_groups,
            "withBluetooth": self.with_component,
        }))
    }
}
