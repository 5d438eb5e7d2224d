pub mod car;

pub use crate::domain::DomainError;
pub use car::{Car, CarBody, Engine, Wheel};
