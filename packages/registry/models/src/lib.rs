#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical registry taxonomy types and observation records.
//!
//! This crate defines the shared vocabulary of the cancer-map system:
//! the closed sex-category enum, the cancer-type and breed reference
//! lists used to populate filter dropdowns, the sentinel values that
//! mean "no constraint", and the flat [`CancerRecord`] observation that
//! every downstream aggregation consumes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Sentinel cancer-type filter value meaning "no constraint".
pub const ALL_TYPES: &str = "All Types";

/// Sentinel breed filter value meaning "no constraint".
pub const ALL_BREEDS: &str = "All Breeds";

/// Sentinel sex filter value meaning "no constraint".
pub const ALL_SEXES: &str = "all";

/// Cancer types tracked by the registry, in dropdown order.
pub const CANCER_TYPES: &[&str] = &[
    "Lymphoma",
    "Osteosarcoma",
    "Mast Cell Tumor",
    "Hemangiosarcoma",
    "Melanoma",
    "Transitional Cell Carcinoma",
    "Soft Tissue Sarcoma",
    "Mammary Carcinoma",
];

/// Dog breeds tracked by the registry, in dropdown order.
pub const BREEDS: &[&str] = &[
    "Golden Retriever",
    "Labrador Retriever",
    "Boxer",
    "German Shepherd",
    "Rottweiler",
    "Bernese Mountain Dog",
    "Beagle",
    "French Bulldog",
    "Poodle",
    "Mixed Breed",
];

/// Sex and reproductive-status category for a demographic slice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Sex {
    /// Intact male.
    MaleIntact,
    /// Neutered male.
    MaleNeutered,
    /// Intact female.
    FemaleIntact,
    /// Spayed female.
    FemaleSpayed,
}

impl Sex {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MaleIntact,
            Self::MaleNeutered,
            Self::FemaleIntact,
            Self::FemaleSpayed,
        ]
    }

    /// Human-readable label for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MaleIntact => "Male Intact",
            Self::MaleNeutered => "Male Neutered",
            Self::FemaleIntact => "Female Intact",
            Self::FemaleSpayed => "Female Spayed",
        }
    }

    /// Whether this category is female.
    #[must_use]
    pub const fn is_female(self) -> bool {
        matches!(self, Self::FemaleIntact | Self::FemaleSpayed)
    }

    /// Whether this category is neutered or spayed.
    #[must_use]
    pub const fn is_altered(self) -> bool {
        matches!(self, Self::MaleNeutered | Self::FemaleSpayed)
    }
}

/// Which rate the dashboard is displaying.
///
/// Carried on API requests for parity with the dashboard's rate toggle;
/// the aggregation pipeline itself is rate-kind agnostic.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RateKind {
    /// New diagnoses per population.
    Incidence,
    /// Deaths per population.
    Mortality,
}

/// One flat observation: cases for a single county x cancer-type x
/// breed x sex slice in a given year.
///
/// Immutable once produced. `rate` is pre-computed by the data source as
/// cases per 10,000 population for this slice; aggregations re-derive
/// rates from `count` and `population` rather than averaging this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancerRecord {
    /// County name (e.g. "Alameda").
    pub county: String,
    /// Region the county belongs to (e.g. "Bay Area").
    pub region: String,
    /// Cancer type name.
    pub cancer_type: String,
    /// Breed name.
    pub breed: String,
    /// Sex category of this slice.
    pub sex: Sex,
    /// Case count for this slice. Non-negative by construction.
    pub count: u32,
    /// Population denominator for this demographic slice.
    pub population: u32,
    /// Cases per 10,000 population, rounded to one decimal place.
    pub rate: f64,
    /// Observation year.
    pub year: u16,
}
