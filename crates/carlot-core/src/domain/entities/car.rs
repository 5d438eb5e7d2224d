//! The `Car` aggregate and the parts it owns.
//!
//! Every type here is an immutable value: fields are private, there are no
//! setters, and equality/hashing are structural over every field. Two cars
//! with identical data are the same car, which is what lets the loader
//! de-duplicate records coming from different sources.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    RawRecord,
    error::DomainError,
    value_objects::{CarBodyColor, CarBodyType, EngineType, TyreType},
};

// ── Engine ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Engine {
    #[serde(rename = "type")]
    kind: EngineType,
    power: f64,
}

impl Engine {
    /// `-0.0` is stored as `0.0`, so both spellings build the same engine.
    pub fn new(kind: EngineType, power: f64) -> Self {
        let power = if power == 0.0 { 0.0 } else { power };
        Self { kind, power }
    }

    pub const fn engine_type(&self) -> EngineType {
        self.kind
    }
    pub const fn power(&self) -> f64 {
        self.power
    }
}

// Power is compared by bit pattern so that `Eq` and `Hash` agree; zero is
// normalised in `Engine::new`.
impl PartialEq for Engine {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.power.to_bits() == other.power.to_bits()
    }
}

impl Eq for Engine {}

impl Hash for Engine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.power.to_bits().hash(state);
    }
}

// ── Wheel ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Wheel {
    #[serde(rename = "type")]
    kind: TyreType,
    model: String,
    size: i64,
}

impl Wheel {
    pub fn new(kind: TyreType, model: impl Into<String>, size: i64) -> Self {
        Self {
            kind,
            model: model.into(),
            size,
        }
    }

    pub const fn tyre_type(&self) -> TyreType {
        self.kind
    }
    pub fn model(&self) -> &str {
        &self.model
    }
    pub const fn size(&self) -> i64 {
        self.size
    }
}

// ── CarBody ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CarBody {
    color: CarBodyColor,
    #[serde(rename = "type")]
    kind: CarBodyType,
    components: BTreeSet<String>,
}

impl CarBody {
    pub fn new<I, S>(color: CarBodyColor, kind: CarBodyType, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            color,
            kind,
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    pub const fn color(&self) -> CarBodyColor {
        self.color
    }
    pub const fn body_type(&self) -> CarBodyType {
        self.kind
    }
    pub fn components(&self) -> &BTreeSet<String> {
        &self.components
    }

    /// Whether every name in `required` is one of this body's components.
    pub fn has_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required
            .iter()
            .all(|name| self.components.contains(name.as_ref()))
    }
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A validated vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    model: String,
    price: BigDecimal,
    mileage: u64,
    engine: Engine,
    car_body: CarBody,
    wheel: Wheel,
}

impl Car {
    pub fn new(
        model: impl Into<String>,
        price: BigDecimal,
        mileage: u64,
        engine: Engine,
        car_body: CarBody,
        wheel: Wheel,
    ) -> Self {
        Self {
            model: model.into(),
            price,
            mileage,
            engine,
            car_body,
            wheel,
        }
    }

    /// Build a car from a raw record.
    ///
    /// Intended for records that already passed
    /// [`CarValidator`](crate::domain::CarValidator); anything the validator
    /// would reject comes back as a `DomainError` instead of a panic.
    pub fn from_record(record: &RawRecord) -> Result<Self, DomainError> {
        let model = string_field(record, "model")?;
        let price = price_field(record)?;
        let mileage = required(record, "mileage")?
            .as_u64()
            .ok_or_else(|| invalid("mileage", "expected a non-negative integer"))?;

        let engine_data = object_field(record, "engine")?;
        let engine = Engine::new(
            tag_field(engine_data, "engine.type")?,
            required(engine_data, "engine.power")?
                .as_f64()
                .ok_or_else(|| invalid("engine.power", "expected a number"))?,
        );

        let body_data = object_field(record, "carBody")?;
        let components = required(body_data, "carBody.components")?
            .as_array()
            .ok_or_else(|| invalid("carBody.components", "expected an array"))?
            .iter()
            .map(|c| {
                c.as_str()
                    .ok_or_else(|| invalid("carBody.components", "expected strings"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let car_body = CarBody::new(
            tag_field(body_data, "carBody.color")?,
            tag_field(body_data, "carBody.type")?,
            components,
        );

        let wheel_data = object_field(record, "wheel")?;
        let wheel = Wheel::new(
            tag_field(wheel_data, "wheel.type")?,
            string_field(wheel_data, "wheel.model")?,
            required(wheel_data, "wheel.size")?
                .as_i64()
                .ok_or_else(|| invalid("wheel.size", "expected an integer"))?,
        );

        Ok(Self::new(model, price, mileage, engine, car_body, wheel))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
    pub fn price(&self) -> &BigDecimal {
        &self.price
    }
    pub const fn mileage(&self) -> u64 {
        self.mileage
    }
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
    pub fn car_body(&self) -> &CarBody {
        &self.car_body
    }
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Inclusive range test on price.
    pub fn has_price_between(&self, min: &BigDecimal, max: &BigDecimal) -> bool {
        min <= &self.price && &self.price <= max
    }

    pub fn has_body_type(&self, body_type: CarBodyType) -> bool {
        self.car_body.kind == body_type
    }

    pub fn has_engine_type(&self, engine_type: EngineType) -> bool {
        self.engine.kind == engine_type
    }

    pub fn has_components<S: AsRef<str>>(&self, required: &[S]) -> bool {
        self.car_body.has_all(required)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components: Vec<&str> = self.car_body.components.iter().map(String::as_str).collect();
        write!(
            f,
            "{} | price {} | {} km | {} {} | {} {} [{}] | {} {} {}",
            self.model,
            self.price,
            self.mileage,
            self.engine.kind,
            self.engine.power,
            self.car_body.color,
            self.car_body.kind,
            components.join(", "),
            self.wheel.kind,
            self.wheel.model,
            self.wheel.size,
        )
    }
}

// ── Record access helpers ─────────────────────────────────────────────────────

fn invalid(field: &'static str, reason: &str) -> DomainError {
    DomainError::InvalidField {
        field,
        reason: reason.to_string(),
    }
}

/// Looks up the last segment of a dotted field name.
fn required<'a>(record: &'a RawRecord, field: &'static str) -> Result<&'a Value, DomainError> {
    let key = field.rsplit('.').next().unwrap_or(field);
    record
        .get(key)
        .ok_or(DomainError::MissingField { field })
}

fn string_field<'a>(record: &'a RawRecord, field: &'static str) -> Result<&'a str, DomainError> {
    required(record, field)?
        .as_str()
        .ok_or_else(|| invalid(field, "expected a string"))
}

fn object_field<'a>(
    record: &'a RawRecord,
    field: &'static str,
) -> Result<&'a RawRecord, DomainError> {
    required(record, field)?
        .as_object()
        .ok_or_else(|| invalid(field, "expected an object"))
}

fn tag_field<T>(record: &RawRecord, field: &'static str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    string_field(record, field)?.parse()
}

fn price_field(record: &RawRecord) -> Result<BigDecimal, DomainError> {
    let number = required(record, "price")?
        .as_number()
        .ok_or_else(|| invalid("price", "expected a number"))?;
    let price = BigDecimal::from_str(&number.to_string())
        .map_err(|e| invalid("price", &e.to_string()))?;
    if price < BigDecimal::from(0) {
        return Err(invalid("price", "must not be negative"));
    }
    Ok(price)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
