//! Cars Service - read-only queries over a loaded collection.
//!
//! The collection is fixed at construction. Every query returns fresh values
//! and leaves the collection untouched, so results never alias each other.

use std::cmp::Ordering;
use std::collections::HashMap;

use bigdecimal::BigDecimal;

use crate::{
    application::services::{
        LoadReport,
        query::{SortAttribute, Statistics, StatisticsAttribute, StatisticsReport},
    },
    domain::{Car, CarBodyType, EngineType, TyreType},
    error::CarlotResult,
};

/// Query service over an ordered car collection.
#[derive(Debug, Clone, Default)]
pub struct CarsService {
    cars: Vec<Car>,
}

impl CarsService {
    /// Wrap `cars`, keeping their order.
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Cars ordered by `attribute`.
    ///
    /// The sort is stable in both directions: cars with equal keys keep
    /// their collection order.
    pub fn sort_cars(&self, attribute: SortAttribute, descending: bool) -> Vec<Car> {
        let compare = |a: &Car, b: &Car| -> Ordering {
            match attribute {
                SortAttribute::Components => a
                    .car_body()
                    .components()
                    .len()
                    .cmp(&b.car_body().components().len()),
                SortAttribute::EnginePower => a.engine().power().total_cmp(&b.engine().power()),
                SortAttribute::WheelSize => a.wheel().size().cmp(&b.wheel().size()),
            }
        };

        let mut sorted = self.cars.clone();
        if descending {
            sorted.sort_by(|a, b| compare(b, a));
        } else {
            sorted.sort_by(compare);
        }
        sorted
    }

    /// [`sort_cars`](Self::sort_cars) with the attribute given by name.
    pub fn sort_cars_by(&self, attribute: &str, descending: bool) -> CarlotResult<Vec<Car>> {
        let attribute: SortAttribute = attribute.parse()?;
        Ok(self.sort_cars(attribute, descending))
    }

    /// Cars of `body_type` priced within `min..=max`.
    pub fn cars_by_body_and_price_range(
        &self,
        body_type: CarBodyType,
        min: &BigDecimal,
        max: &BigDecimal,
    ) -> Vec<Car> {
        self.cars
            .iter()
            .filter(|car| car.has_body_type(body_type) && car.has_price_between(min, max))
            .cloned()
            .collect()
    }

    /// Model names of cars with `engine_type`, ascending, duplicates kept.
    pub fn model_names_with_engine_type(&self, engine_type: EngineType) -> Vec<String> {
        let mut models: Vec<String> = self
            .cars
            .iter()
            .filter(|car| car.has_engine_type(engine_type))
            .map(|car| car.model().to_string())
            .collect();
        models.sort();
        models
    }

    /// Min, max and mean of `attribute`; `None` when there are no cars.
    pub fn statistics(&self, attribute: StatisticsAttribute) -> Option<StatisticsReport> {
        if self.cars.is_empty() {
            return None;
        }
        let count = BigDecimal::from(self.cars.len() as u64);

        let report = match attribute {
            StatisticsAttribute::Price => {
                let prices = || self.cars.iter().map(Car::price);
                let total = prices().fold(BigDecimal::from(0), |acc, price| acc + price);
                StatisticsReport::Price(Statistics {
                    min: prices().min()?.clone(),
                    max: prices().max()?.clone(),
                    average: total / count,
                })
            }
            StatisticsAttribute::Mileage => {
                let mileages = || self.cars.iter().map(Car::mileage);
                let total = mileages().fold(BigDecimal::from(0), |acc, m| {
                    acc + BigDecimal::from(m)
                });
                StatisticsReport::Mileage(Statistics {
                    min: mileages().min()?,
                    max: mileages().max()?,
                    average: total / count,
                })
            }
            StatisticsAttribute::EnginePower => {
                let powers = || self.cars.iter().map(|car| car.engine().power());
                StatisticsReport::EnginePower(Statistics {
                    min: powers().fold(f64::INFINITY, f64::min),
                    max: powers().fold(f64::NEG_INFINITY, f64::max),
                    average: powers().sum::<f64>() / self.cars.len() as f64,
                })
            }
        };
        Some(report)
    }

    /// [`statistics`](Self::statistics) with the attribute given by name.
    ///
    /// An unknown name is an error even when the collection is empty.
    pub fn statistics_by_name(&self, attribute: &str) -> CarlotResult<Option<StatisticsReport>> {
        let attribute: StatisticsAttribute = attribute.parse()?;
        Ok(self.statistics(attribute))
    }

    /// Each distinct car mapped to its mileage.
    pub fn car_mileage_pairs(&self) -> HashMap<Car, u64> {
        self.cars
            .iter()
            .map(|car| (car.clone(), car.mileage()))
            .collect()
    }

    /// Cars grouped by tyre type, largest group first.
    ///
    /// Empty groups are omitted. Equal-size groups follow [`TyreType::ALL`]
    /// order; cars inside a group keep collection order.
    pub fn cars_by_tyre_type(&self) -> Vec<(TyreType, Vec<Car>)> {
        let mut groups: Vec<(TyreType, Vec<Car>)> = TyreType::ALL
            .iter()
            .map(|&tyre| {
                let cars = self
                    .cars
                    .iter()
                    .filter(|car| car.wheel().tyre_type() == tyre)
                    .cloned()
                    .collect::<Vec<_>>();
                (tyre, cars)
            })
            .filter(|(_, cars)| !cars.is_empty())
            .collect();

        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        groups
    }

    /// Cars whose components include every name in `required`.
    ///
    /// An empty `required` list matches every car.
    pub fn cars_with_components<S: AsRef<str>>(&self, required: &[S]) -> Vec<Car> {
        self.cars
            .iter()
            .filter(|car| car.has_components(required))
            .cloned()
            .collect()
    }
}

impl From<Vec<Car>> for CarsService {
    fn from(cars: Vec<Car>) -> Self {
        Self::new(cars)
    }
}

impl From<LoadReport> for CarsService {
    fn from(report: LoadReport) -> Self {
        Self::new(report.into_cars())
    }
}
