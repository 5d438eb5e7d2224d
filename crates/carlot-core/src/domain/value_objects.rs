//! Domain value objects: EngineType, TyreType, CarBodyColor, CarBodyType.
//!
//! # Design
//!
//! These are closed enumerations of upper-case string tags. They are `Copy`,
//! compared by value and never registered at runtime. Each one answers a
//! single question for the validator, [`has_member`](EngineType::has_member):
//! "is this tag one of mine?". Turning a tag into a variant goes through
//! `FromStr`, which is a separate, fallible path.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add its tag to the `tagged_enum!` invocation
//! 3. Validation and parsing pick it up with no further changes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Implements the tag table, `Display` and `FromStr` for a closed enum.
macro_rules! tagged_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }

            /// Whether `tag` names one of the declared members.
            ///
            /// Exact match only; never fails.
            pub fn has_member(tag: &str) -> bool {
                matches!(tag, $($tag)|+)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Self::$variant),)+
                    other => Err(DomainError::UnknownTag {
                        kind: $kind,
                        tag: other.to_string(),
                    }),
                }
            }
        }
    };
}

// ── EngineType ───────────────────────────────────────────────────────────────

/// Fuel an engine runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EngineType {
    Diesel,
    Gasoline,
    Lpg,
}

tagged_enum!(EngineType, "engine type", {
    Diesel => "DIESEL",
    Gasoline => "GASOLINE",
    Lpg => "LPG",
});

// ── TyreType ─────────────────────────────────────────────────────────────────

/// Season a tyre is made for.
///
/// Declaration order matters: it breaks ties between equally sized groups in
/// [`CarsService::cars_by_tyre_type`](crate::application::CarsService::cars_by_tyre_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TyreType {
    Winter,
    Summer,
}

tagged_enum!(TyreType, "tyre type", {
    Winter => "WINTER",
    Summer => "SUMMER",
});

// ── CarBodyColor ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarBodyColor {
    Black,
    Silver,
    White,
    Red,
    Blue,
    Green,
}

tagged_enum!(CarBodyColor, "car body color", {
    Black => "BLACK",
    Silver => "SILVER",
    White => "WHITE",
    Red => "RED",
    Blue => "BLUE",
    Green => "GREEN",
});

// ── CarBodyType ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarBodyType {
    Sedan,
    Hatchback,
    Combi,
}

tagged_enum!(CarBodyType, "car body type", {
    Sedan => "SEDAN",
    Hatchback => "HATCHBACK",
    Combi => "COMBI",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact() {
        assert!(EngineType::has_member("DIESEL"));
        assert!(EngineType::has_member("LPG"));
        assert!(!EngineType::has_member("diesel"));
        assert!(!EngineType::has_member("ELECTRIC"));
        assert!(!EngineType::has_member(""));
    }

    #[test]
    fn membership_covers_every_enum() {
        assert!(TyreType::has_member("SUMMER"));
        assert!(!TyreType::has_member("ALL SEASON"));
        assert!(CarBodyColor::has_member("GREEN"));
        assert!(!CarBodyColor::has_member("PINK"));
        assert!(CarBodyType::has_member("HATCHBACK"));
        assert!(!CarBodyType::has_member("COUPE"));
    }

    #[test]
    fn parse_round_trips_through_display() {
        for ty in CarBodyColor::ALL {
            assert_eq!(ty.to_string().parse::<CarBodyColor>().unwrap(), *ty);
        }
        for ty in EngineType::ALL {
            assert!(EngineType::has_member(ty.as_str()));
        }
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = "COUPE".parse::<CarBodyType>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownTag {
                kind: "car body type",
                tag: "COUPE".into()
            }
        );
    }

    #[test]
    fn all_lists_declaration_order() {
        assert_eq!(TyreType::ALL, &[TyreType::Winter, TyreType::Summer]);
    }

    #[test]
    fn serializes_as_tag() {
        assert_eq!(
            serde_json::to_string(&EngineType::Gasoline).unwrap(),
            "\"GASOLINE\""
        );
    }
}
