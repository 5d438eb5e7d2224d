//! End-to-end loading from real files on disk.

use std::fs;

use carlot_adapters::{JsonFileSource, MemorySource, discover_json_files};
use carlot_core::{
    application::{CarsService, LoaderService, SortAttribute},
    domain::CarValidator,
};
use tempfile::TempDir;

const UPPER: &str = r"[A-Z\s]+";

fn car(model: &str, power: &str) -> String {
    format!(
        r#"{{"model": "{model}", "price": 100, "mileage": 10,
            "engine": {{"type": "DIESEL", "power": {power}}},
            "carBody": {{"color": "GREEN", "type": "COMBI", "components": ["ABS"]}},
            "wheel": {{"type": "SUMMER", "model": "DUNLOP", "size": 15}}}}"#
    )
}

fn loader(source: impl carlot_core::application::RecordSource + 'static) -> LoaderService {
    LoaderService::new(
        Box::new(source),
        Box::new(CarValidator::new(UPPER, UPPER, UPPER).unwrap()),
    )
}

#[test]
fn loads_discovered_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("audi.json"), car("AUDI", "90.0")).unwrap();
    fs::write(dir.path().join("bmw.json"), car("BMW", "150.0")).unwrap();
    fs::write(dir.path().join("bmw-copy.json"), car("BMW", "150.0")).unwrap();
    fs::write(dir.path().join("broken.json"), "{").unwrap();

    let files: Vec<String> = discover_json_files(dir.path())
        .unwrap()
        .into_iter()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(files.len(), 4);

    let report = loader(JsonFileSource::new()).load(&files);
    assert_eq!(report.cars().len(), 2);
    assert_eq!(report.duplicates(), 1);
    assert_eq!(report.failures().len(), 1);
    assert!(report.failures()[0].source.ends_with("broken.json"));

    let service = CarsService::from(report);
    let sorted = service.sort_cars(SortAttribute::EnginePower, true);
    assert_eq!(sorted[0].model(), "BMW");
}

#[test]
fn base_dir_resolves_relative_names() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/VOLVO.json"), car("VOLVO", "120.0")).unwrap();

    let report = loader(JsonFileSource::with_base_dir(dir.path())).load(&["data/VOLVO.json"]);
    assert_eq!(report.cars()[0].model(), "VOLVO");
}

#[test]
fn memory_source_feeds_the_loader() {
    let source = MemorySource::new()
        .with("one", car("SKODA", "70.0"))
        .with("two", car("skoda", "70.0"));

    let report = loader(source).load(&["one", "two"]);
    assert_eq!(report.cars().len(), 1);
    assert_eq!(report.rejected().len(), 1);
    assert_eq!(report.rejected()[0].source, "two");
}
