// ============================================================
// Layer 3 — Passenger Domain Types
// ============================================================
// The seven passenger attributes the classifier was trained on,
// plus the static category maps used to display them.
//
// Categorical attributes are enums rather than raw integers:
// every code the form can produce has a label by construction,
// and an unknown code simply cannot be represented.
//
// The feature order below is the exact column order the model
// was trained with:
//
//   Pclass, Sex, Age, SibSp, Parch, Fare, Embarked
//
// Reference: Rust Book §6 (Enums), §5 (Structs)

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of values in a feature vector.
pub const FEATURE_COUNT: usize = 7;

/// Column names in the order the model expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["Pclass", "Sex", "Age", "SibSp", "Parch", "Fare", "Embarked"];

pub const AGE_RANGE:   RangeInclusive<u16> = 0..=80;
pub const SIBSP_RANGE: RangeInclusive<u16> = 0..=10;
pub const PARCH_RANGE: RangeInclusive<u16> = 0..=6;
pub const FARE_RANGE:  RangeInclusive<u16> = 0..=512;

// ─── Category ─────────────────────────────────────────────────────────────────
/// A categorical feature: a small closed set of codes, each with a label.
///
/// `ALL` is ordered by code, so `ALL[i].code() == i`.
pub trait Category: Copy + PartialEq + 'static {
    /// Every variant, ordered by code
    const ALL: &'static [Self];

    /// Human-readable label for display
    fn label(self) -> &'static str;

    fn code(self) -> u8 {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i as u8)
            .unwrap_or_default()
    }

    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

/// Ticket class (`Pclass`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketClass {
    First,
    Second,
    Third,
}

impl Category for TicketClass {
    const ALL: &'static [Self] = &[Self::First, Self::Second, Self::Third];

    fn label(self) -> &'static str {
        match self {
            Self::First  => "First Class",
            Self::Second => "Second Class",
            Self::Third  => "Third Class",
        }
    }
}

/// Passenger sex (`Sex`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Category for Sex {
    const ALL: &'static [Self] = &[Self::Female, Self::Male];

    fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male   => "Male",
        }
    }
}

/// Port of embarkation (`Embarked`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Port {
    Cherbourg,
    Queenstown,
    Southampton,
}

impl Category for Port {
    const ALL: &'static [Self] = &[Self::Cherbourg, Self::Queenstown, Self::Southampton];

    fn label(self) -> &'static str {
        match self {
            Self::Cherbourg   => "Cherbourg",
            Self::Queenstown  => "Queenstown",
            Self::Southampton => "Southampton",
        }
    }
}

// ─── Passenger ────────────────────────────────────────────────────────────────
/// One set of form inputs. Numeric fields are always inside their
/// declared ranges: `new` rejects anything else and the form clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub class:    TicketClass,
    pub sex:      Sex,
    pub age:      u16,
    pub sibsp:    u16,
    pub parch:    u16,
    pub fare:     u16,
    pub embarked: Port,
}

impl Default for Passenger {
    fn default() -> Self {
        Self {
            class:    TicketClass::Third,
            sex:      Sex::Male,
            age:      30,
            sibsp:    1,
            parch:    0,
            fare:     100,
            embarked: Port::Southampton,
        }
    }
}

impl Passenger {
    pub fn new(
        class:    TicketClass,
        sex:      Sex,
        age:      u16,
        sibsp:    u16,
        parch:    u16,
        fare:     u16,
        embarked: Port,
    ) -> Result<Self> {
        ensure!(AGE_RANGE.contains(&age),     "age {age} outside {AGE_RANGE:?}");
        ensure!(SIBSP_RANGE.contains(&sibsp), "sibsp {sibsp} outside {SIBSP_RANGE:?}");
        ensure!(PARCH_RANGE.contains(&parch), "parch {parch} outside {PARCH_RANGE:?}");
        ensure!(FARE_RANGE.contains(&fare),   "fare {fare} outside {FARE_RANGE:?}");
        Ok(Self { class, sex, age, sibsp, parch, fare, embarked })
    }

    /// Build the feature vector in training column order.
    pub fn to_features(&self) -> FeatureVector {
        FeatureVector([
            self.class.code() as f64,
            self.sex.code() as f64,
            self.age as f64,
            self.sibsp as f64,
            self.parch as f64,
            self.fare as f64,
            self.embarked.code() as f64,
        ])
    }
}

// ─── FeatureVector ────────────────────────────────────────────────────────────
/// The ordered model input. Position `i` holds the column `FEATURE_NAMES[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// (column name, value) pairs, in order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn assert_codes_round_trip<C: Category + std::fmt::Debug>() {
        for (i, c) in C::ALL.iter().enumerate() {
            assert_eq!(c.code() as usize, i);
            assert_eq!(C::from_code(i as u8), Some(*c));
            assert!(!c.label().is_empty(), "{c:?} has no label");
        }
        assert_eq!(C::from_code(C::ALL.len() as u8), None);
    }

    #[test]
    fn test_every_code_has_a_label() {
        assert_codes_round_trip::<TicketClass>();
        assert_codes_round_trip::<Sex>();
        assert_codes_round_trip::<Port>();
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(TicketClass::from_code(2).map(Category::label), Some("Third Class"));
        assert_eq!(Sex::from_code(0).map(Category::label), Some("Female"));
        assert_eq!(Port::from_code(1).map(Category::label), Some("Queenstown"));
    }

    #[test]
    fn test_default_passenger_matches_form_defaults() {
        let p = Passenger::default();
        assert_eq!(p.to_features().values(), &[2.0, 1.0, 30.0, 1.0, 0.0, 100.0, 2.0]);
    }

    #[test]
    fn test_feature_order() {
        let p = Passenger::new(TicketClass::First, Sex::Female, 42, 3, 2, 77, Port::Cherbourg).unwrap();
        let named: Vec<_> = p.to_features().named().collect();
        assert_eq!(
            named,
            vec![
                ("Pclass", 0.0), ("Sex", 0.0), ("Age", 42.0), ("SibSp", 3.0),
                ("Parch", 2.0), ("Fare", 77.0), ("Embarked", 0.0),
            ]
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(Passenger::new(TicketClass::First, Sex::Male, 80, 10, 6, 512, Port::Queenstown).is_ok());
        assert!(Passenger::new(TicketClass::First, Sex::Male, 0, 0, 0, 0, Port::Queenstown).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let d = Passenger::default();
        assert!(Passenger::new(d.class, d.sex, 81, 0, 0, 0, d.embarked).is_err());
        assert!(Passenger::new(d.class, d.sex, 0, 11, 0, 0, d.embarked).is_err());
        assert!(Passenger::new(d.class, d.sex, 0, 0, 7, 0, d.embarked).is_err());
        assert!(Passenger::new(d.class, d.sex, 0, 0, 0, 513, d.embarked).is_err());
    }
}
