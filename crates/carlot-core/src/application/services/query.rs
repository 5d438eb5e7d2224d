//! Query selectors and statistics results.
//!
//! Callers pick a sort key or a statistics field either directly through the
//! enums or by name via `FromStr`. Names are resolved once, at the boundary;
//! an unknown name is an [`ApplicationError::InvalidQueryAttribute`].

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::application::ApplicationError;

// ── Sorting ───────────────────────────────────────────────────────────────────

/// Numeric key a collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAttribute {
    /// Number of car body components.
    Components,
    EnginePower,
    WheelSize,
}

impl SortAttribute {
    pub const ALL: &'static [Self] = &[Self::Components, Self::EnginePower, Self::WheelSize];

    const EXPECTED: &'static str = "components, engine power, wheel size";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::EnginePower => "engine power",
            Self::WheelSize => "wheel size",
        }
    }
}

impl fmt::Display for SortAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAttribute {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "components" => Ok(Self::Components),
            "engine power" => Ok(Self::EnginePower),
            "wheel size" => Ok(Self::WheelSize),
            other => Err(ApplicationError::InvalidQueryAttribute {
                attribute: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Field statistics can be computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticsAttribute {
    Price,
    Mileage,
    EnginePower,
}

impl StatisticsAttribute {
    pub const ALL: &'static [Self] = &[Self::Price, Self::Mileage, Self::EnginePower];

    const EXPECTED: &'static str = "price, mileage, engine power";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Mileage => "mileage",
            Self::EnginePower => "engine power",
        }
    }
}

impl fmt::Display for StatisticsAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatisticsAttribute {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "mileage" => Ok(Self::Mileage),
            "engine power" => Ok(Self::EnginePower),
            other => Err(ApplicationError::InvalidQueryAttribute {
                attribute: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Minimum, maximum and mean of one field.
///
/// `A` is the type of the mean, which can be wider than the values
/// themselves (the mean of integer mileages is a decimal).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics<T, A = T> {
    pub min: T,
    pub max: T,
    pub average: A,
}

/// Statistics for a non-empty collection, typed per field.
///
/// Price and mileage means are exact decimals; engine power stays `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "attribute", rename_all = "snake_case")]
pub enum StatisticsReport {
    Price(Statistics<BigDecimal>),
    Mileage(Statistics<u64, BigDecimal>),
    EnginePower(Statistics<f64>),
}

impl StatisticsReport {
    pub fn attribute(&self) -> StatisticsAttribute {
        match self {
            Self::Price(_) => StatisticsAttribute::Price,
            Self::Mileage(_) => StatisticsAttribute::Mileage,
            Self::EnginePower(_) => StatisticsAttribute::EnginePower,
        }
    }
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price(s) => write!(f, "min: {}, max: {}, average: {}", s.min, s.max, s.average),
            Self::Mileage(s) => {
                write!(f, "min: {}, max: {}, average: {}", s.min, s.max, s.average)
            }
            Self::EnginePower(s) => {
                write!(f, "min: {}, max: {}, average: {}", s.min, s.max, s.average)
            }
        }
    }
}
