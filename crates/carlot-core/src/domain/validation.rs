//! Record validation.
//!
//! A raw record is checked field by field. Every rule runs, failures
//! accumulate into a [`ValidationErrors`] map keyed by top-level field name,
//! and the record is valid iff that map is empty. Nested objects (`engine`,
//! `carBody`, `wheel`) are checked as a unit: one message per object, no
//! matter how many of its sub-fields are wrong.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    RawRecord,
    error::DomainError,
    value_objects::{CarBodyColor, CarBodyType, EngineType, TyreType},
};

pub const NOT_FOUND: &str = "not found";
pub const PRICE_NOT_CORRECT: &str = "price value is not correct";
pub const MILEAGE_NOT_CORRECT: &str = "mileage value is not correct";
pub const ENGINE_NOT_CORRECT: &str = "engine data not correct";
pub const CAR_BODY_NOT_CORRECT: &str = "car body data not correct";
pub const WHEEL_NOT_CORRECT: &str = "wheel data not correct";

// ── Report types ──────────────────────────────────────────────────────────────

/// Field name → messages.
///
/// Fields iterate in name order; each field's messages keep the order they
/// were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}

/// Verdict for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: ValidationErrors,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The `(is_valid, errors)` pair.
    pub fn into_parts(self) -> (bool, ValidationErrors) {
        (self.errors.is_empty(), self.errors)
    }
}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        Self { errors }
    }
}

// ── Validator seam ────────────────────────────────────────────────────────────

/// Anything that can judge a raw record.
///
/// The loader depends on this trait rather than on [`CarValidator`] so tests
/// can substitute their own rules.
pub trait RecordValidator: Send + Sync {
    fn validate(&self, record: &RawRecord) -> ValidationReport;
}

// ── CarValidator ──────────────────────────────────────────────────────────────

/// Rule set for vehicle records.
///
/// The three patterns are compiled once, anchored to the whole value.
#[derive(Debug, Clone)]
pub struct CarValidator {
    model: Regex,
    components: Regex,
    tyre_model: Regex,
}

impl CarValidator {
    pub fn new(
        model_regex: &str,
        components_regex: &str,
        tyre_model_regex: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            model: full_match(model_regex)?,
            components: full_match(components_regex)?,
            tyre_model: full_match(tyre_model_regex)?,
        })
    }

    fn check_model(&self, record: &RawRecord, errors: &mut ValidationErrors) {
        match record.get("model") {
            None => errors.add("model", NOT_FOUND),
            Some(Value::String(model)) if self.model.is_match(model) => {}
            Some(Value::String(model)) => {
                errors.add("model", format!("{model} does not match pattern"))
            }
            Some(other) => errors.add("model", format!("{other} does not match pattern")),
        }
    }

    fn check_price(record: &RawRecord, errors: &mut ValidationErrors) {
        match record.get("price") {
            None => errors.add("price", NOT_FOUND),
            Some(value) if is_non_negative_number(value) => {}
            Some(_) => errors.add("price", PRICE_NOT_CORRECT),
        }
    }

    fn check_mileage(record: &RawRecord, errors: &mut ValidationErrors) {
        match record.get("mileage") {
            None => errors.add("mileage", NOT_FOUND),
            Some(value) if value.is_u64() => {}
            Some(_) => errors.add("mileage", MILEAGE_NOT_CORRECT),
        }
    }

    fn check_engine(record: &RawRecord, errors: &mut ValidationErrors) {
        match record.get("engine") {
            None => errors.add("engine", NOT_FOUND),
            Some(value) if engine_is_valid(value) => {}
            Some(_) => errors.add("engine", ENGINE_NOT_CORRECT),
        }
    }

    fn check_car_body(&self, record: &RawRecord, errors: &mut ValidationErrors) {
        match record.get("carBody") {
            None => errors.add("carBody", NOT_FOUND),
            Some(value) if self.car_body_is_valid(value) => {}
            Some(_) => errors.add("carBody", CAR_BODY_NOT_CORRECT),
        }
    }

    fn check_wheel(&self, record: &RawRecord, errors: &mut ValidationErrors) {
        match record.get("wheel") {
            None => errors.add("wheel", NOT_FOUND),
            Some(value) if self.wheel_is_valid(value) => {}
            Some(_) => errors.add("wheel", WHEEL_NOT_CORRECT),
        }
    }

    fn car_body_is_valid(&self, value: &Value) -> bool {
        let Some(body) = value.as_object() else {
            return false;
        };
        tag_is(body.get("color"), CarBodyColor::has_member)
            && tag_is(body.get("type"), CarBodyType::has_member)
            && body
                .get("components")
                .and_then(Value::as_array)
                .is_some_and(|components| {
                    components.iter().all(|c| {
                        c.as_str()
                            .is_some_and(|name| self.components.is_match(name))
                    })
                })
    }

    fn wheel_is_valid(&self, value: &Value) -> bool {
        let Some(wheel) = value.as_object() else {
            return false;
        };
        tag_is(wheel.get("type"), TyreType::has_member)
            && wheel
                .get("model")
                .and_then(Value::as_str)
                .is_some_and(|model| self.tyre_model.is_match(model))
            && wheel.get("size").is_some_and(Value::is_i64)
    }
}

impl RecordValidator for CarValidator {
    fn validate(&self, record: &RawRecord) -> ValidationReport {
        let mut errors = ValidationErrors::new();

        self.check_model(record, &mut errors);
        Self::check_price(record, &mut errors);
        Self::check_mileage(record, &mut errors);
        Self::check_engine(record, &mut errors);
        self.check_car_body(record, &mut errors);
        self.check_wheel(record, &mut errors);

        ValidationReport { errors }
    }
}

// ── Rule helpers ──────────────────────────────────────────────────────────────

fn full_match(pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| DomainError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

fn is_non_negative_number(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.is_u64() || n.as_f64().is_some_and(|f| f >= 0.0))
}

fn tag_is(value: Option<&Value>, has_member: fn(&str) -> bool) -> bool {
    value.and_then(Value::as_str).is_some_and(has_member)
}

fn engine_is_valid(value: &Value) -> bool {
    let Some(engine) = value.as_object() else {
        return false;
    };
    tag_is(engine.get("type"), EngineType::has_member)
        && engine.get("power").is_some_and(Value::is_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const UPPER: &str = r"[A-Z\s]+";

    fn validator() -> CarValidator {
        CarValidator::new(UPPER, UPPER, UPPER).unwrap()
    }

    fn valid_record() -> RawRecord {
        json!({
            "model": "BMW",
            "price": 150,
            "mileage": 2000,
            "engine": {"type": "GASOLINE", "power": 190.0},
            "carBody": {
                "color": "WHITE",
                "type": "COMBI",
                "components": ["BLUETOOTH", "AIR CONDITIONING"]
            },
            "wheel": {"type": "SUMMER", "model": "MICHELIN", "size": 18}
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn messages(report: &ValidationReport, field: &str) -> Vec<String> {
        report.errors().get(field).unwrap_or_default().to_vec()
    }

    #[test]
    fn valid_record_has_no_errors() {
        let (valid, errors) = validator().validate(&valid_record()).into_parts();
        assert!(valid);
        assert!(errors.is_empty());
    }

    #[test]
    fn every_missing_field_is_not_found() {
        for field in ["model", "price", "mileage", "engine", "carBody", "wheel"] {
            let mut record = valid_record();
            record.remove(field);
            let report = validator().validate(&record);
            assert!(!report.is_valid());
            assert_eq!(messages(&report, field), vec![NOT_FOUND], "field {field}");
            assert_eq!(report.errors().len(), 1, "field {field}");
        }
    }

    #[test]
    fn empty_record_reports_all_fields() {
        let report = validator().validate(&RawRecord::new());
        assert_eq!(report.errors().len(), 6);
        assert!(report.errors().iter().all(|(_, m)| m == [NOT_FOUND]));
    }

    #[test]
    fn negative_price_reports_only_price() {
        let mut record = valid_record();
        record["price"] = json!(-10);
        let report = validator().validate(&record);
        assert_eq!(messages(&report, "price"), vec![PRICE_NOT_CORRECT]);
        assert_eq!(report.errors().fields().collect::<Vec<_>>(), vec!["price"]);
    }

    #[test]
    fn decimal_price_is_accepted() {
        let mut record = valid_record();
        record["price"] = json!(99.99);
        assert!(validator().validate(&record).is_valid());
    }

    #[test]
    fn price_as_string_is_rejected() {
        let mut record = valid_record();
        record["price"] = json!("150");
        assert_eq!(
            messages(&validator().validate(&record), "price"),
            vec![PRICE_NOT_CORRECT]
        );
    }

    #[test]
    fn mileage_must_be_non_negative_integer() {
        for bad in [json!(-1), json!(10.5), json!("10")] {
            let mut record = valid_record();
            record["mileage"] = bad;
            assert_eq!(
                messages(&validator().validate(&record), "mileage"),
                vec![MILEAGE_NOT_CORRECT]
            );
        }
    }

    #[test]
    fn model_must_match_whole_value() {
        let mut record = valid_record();
        record["model"] = json!("BMW x5");
        assert_eq!(
            messages(&validator().validate(&record), "model"),
            vec!["BMW x5 does not match pattern"]
        );
    }

    #[test]
    fn non_string_model_is_reported_with_its_value() {
        let mut record = valid_record();
        record["model"] = json!(42);
        assert_eq!(
            messages(&validator().validate(&record), "model"),
            vec!["42 does not match pattern"]
        );
    }

    #[test]
    fn unknown_engine_type_is_rejected() {
        let mut record = valid_record();
        record["engine"]["type"] = json!("ELECTRIC");
        assert_eq!(
            messages(&validator().validate(&record), "engine"),
            vec![ENGINE_NOT_CORRECT]
        );
    }

    #[test]
    fn engine_power_must_be_numeric() {
        let mut record = valid_record();
        record["engine"]["power"] = json!("fast");
        assert!(!validator().validate(&record).is_valid());
    }

    #[test]
    fn component_outside_pattern_fails_body() {
        let mut record = valid_record();
        record["carBody"]["components"] = json!(["ABS", "wifi"]);
        assert_eq!(
            messages(&validator().validate(&record), "carBody"),
            vec![CAR_BODY_NOT_CORRECT]
        );
    }

    #[test]
    fn empty_component_list_is_valid() {
        let mut record = valid_record();
        record["carBody"]["components"] = json!([]);
        assert!(validator().validate(&record).is_valid());
    }

    #[test]
    fn unknown_colour_fails_body() {
        let mut record = valid_record();
        record["carBody"]["color"] = json!("PINK");
        assert!(validator().validate(&record).errors().contains("carBody"));
    }

    #[test]
    fn wheel_rules() {
        let cases = [
            ("type", json!("ALL SEASON")),
            ("model", json!("michelin")),
            ("size", json!(17.5)),
        ];
        for (key, bad) in cases {
            let mut record = valid_record();
            record["wheel"][key] = bad;
            assert_eq!(
                messages(&validator().validate(&record), "wheel"),
                vec![WHEEL_NOT_CORRECT],
                "wheel.{key}"
            );
        }
    }

    #[test]
    fn nested_field_of_wrong_shape_fails() {
        let mut record = valid_record();
        record["wheel"] = json!("SUMMER");
        record["engine"] = json!(null);
        let report = validator().validate(&record);
        assert_eq!(messages(&report, "wheel"), vec![WHEEL_NOT_CORRECT]);
        assert_eq!(messages(&report, "engine"), vec![ENGINE_NOT_CORRECT]);
    }

    #[test]
    fn failures_accumulate_without_short_circuit() {
        let mut record = valid_record();
        record["model"] = json!("bmw");
        record["price"] = json!(-1);
        record.remove("wheel");
        let report = validator().validate(&record);
        assert_eq!(
            report.errors().fields().collect::<Vec<_>>(),
            vec!["model", "price", "wheel"]
        );
    }

    #[test]
    fn invalid_pattern_is_a_construction_error() {
        let err = CarValidator::new("[A-Z", UPPER, UPPER).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPattern { .. }));
    }

    #[test]
    fn alternation_is_still_anchored() {
        let v = CarValidator::new("AUDI|BMW", UPPER, UPPER).unwrap();
        let mut record = valid_record();
        record["model"] = json!("BMWX");
        assert!(!v.validate(&record).is_valid());
        record["model"] = json!("AUDI");
        assert!(v.validate(&record).is_valid());
    }

    #[test]
    fn errors_display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("price", PRICE_NOT_CORRECT);
        errors.add("model", NOT_FOUND);
        assert_eq!(
            errors.to_string(),
            "model: not found; price: price value is not correct"
        );
    }
}
