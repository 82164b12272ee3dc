#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic synthetic registry record generator.
//!
//! Produces one [`CancerRecord`] per county x cancer-type x breed x sex
//! slice using published-rate-shaped base rates, breed risk
//! multipliers, regional variation, and sex skews, with seeded jitter
//! so the same seed always yields the same dataset. Slices whose
//! rounded case count is zero are dropped, mirroring suppression of
//! empty cells in the real registry extracts.

use cancer_map_geography_models::CountyDirectory;
use cancer_map_registry_models::{BREEDS, CANCER_TYPES, CancerRecord, Sex};
use chrono::Datelike as _;
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};
use std::io::Write as _;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while generating or writing records.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    /// RNG seed; the same seed yields the same dataset.
    pub seed: u64,
    /// Observation year stamped on every record.
    pub year: u16,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let year = chrono::Utc::now().year() as u16;
        Self { seed: 42, year }
    }
}

/// Share of a county's dog population assumed to be mixed breed.
const MIXED_BREED_SHARE: f64 = 0.35;

/// Share of a county's dog population assumed per pure breed.
const PURE_BREED_SHARE: f64 = 0.065;

/// Base incidence rate per 10,000 for a cancer type.
fn base_rate(cancer_type: &str) -> f64 {
    match cancer_type {
        "Lymphoma" => 45.0,
        "Osteosarcoma" => 28.0,
        "Mast Cell Tumor" => 52.0,
        "Hemangiosarcoma" => 35.0,
        "Melanoma" => 22.0,
        "Transitional Cell Carcinoma" => 15.0,
        "Soft Tissue Sarcoma" => 32.0,
        "Mammary Carcinoma" => 48.0,
        _ => 30.0,
    }
}

/// Relative risk multiplier for a breed and cancer type.
fn breed_multiplier(breed: &str, cancer_type: &str) -> f64 {
    match (breed, cancer_type) {
        ("Golden Retriever", "Lymphoma") => 1.8,
        ("Golden Retriever", "Hemangiosarcoma") => 2.2,
        ("Golden Retriever", _) => 1.3,
        ("Labrador Retriever", "Lymphoma") => 1.5,
        ("Labrador Retriever", "Mast Cell Tumor") => 1.4,
        ("Labrador Retriever", _) => 1.1,
        ("Boxer", "Mast Cell Tumor") => 2.5,
        ("Boxer", "Lymphoma") => 1.6,
        ("Boxer", _) => 1.4,
        ("German Shepherd", "Hemangiosarcoma") => 1.8,
        ("German Shepherd", _) => 1.2,
        ("Rottweiler", "Osteosarcoma") => 2.8,
        ("Rottweiler", _) => 1.3,
        ("Bernese Mountain Dog", "Lymphoma") => 1.9,
        ("Bernese Mountain Dog", _) => 1.5,
        ("Beagle", _) => 0.8,
        ("French Bulldog", _) => 0.9,
        ("Poodle", _) => 0.85,
        ("Mixed Breed", _) => 0.7,
        _ => 1.0,
    }
}

/// Regional environmental variation.
fn region_multiplier(region: &str) -> f64 {
    match region {
        "Bay Area" => 1.1,
        "Southern CA" => 1.05,
        "Northern CA" => 0.95,
        _ => 1.0,
    }
}

/// Sex skew. Mammary carcinoma is overwhelmingly a disease of intact
/// females; for everything else altered animals carry a mild excess.
fn sex_multiplier(sex: Sex, cancer_type: &str) -> f64 {
    if cancer_type == "Mammary Carcinoma" {
        if sex.is_female() {
            if sex == Sex::FemaleIntact { 7.0 } else { 0.5 }
        } else {
            0.01
        }
    } else if sex.is_altered() {
        1.15
    } else {
        1.0
    }
}

/// Generates the full synthetic record set for the counties in
/// `directory`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn generate_records(
    config: &GenerateConfig,
    directory: &CountyDirectory,
) -> Vec<CancerRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::new();

    for county in directory.entries() {
        for cancer_type in CANCER_TYPES {
            for breed in BREEDS {
                for &sex in Sex::all() {
                    let jitter = rng.gen_range(0.8..1.2);
                    let rate = base_rate(cancer_type)
                        * breed_multiplier(breed, cancer_type)
                        * region_multiplier(county.region)
                        * sex_multiplier(sex, cancer_type)
                        * jitter;

                    let share = if *breed == "Mixed Breed" {
                        MIXED_BREED_SHARE
                    } else {
                        PURE_BREED_SHARE
                    };
                    // Population for this breed/sex demographic slice.
                    let population =
                        (f64::from(county.population) * share / 4.0).round() as u32;
                    let count = (f64::from(population) * rate / 10_000.0).round() as u32;

                    if count > 0 {
                        records.push(CancerRecord {
                            county: county.name.to_string(),
                            region: county.region.to_string(),
                            cancer_type: (*cancer_type).to_string(),
                            breed: (*breed).to_string(),
                            sex,
                            count,
                            population,
                            rate: (rate * 10.0).round() / 10.0,
                            year: config.year,
                        });
                    }
                }
            }
        }
    }

    log::info!(
        "generated {} records for {} counties (seed {})",
        records.len(),
        directory.entries().len(),
        config.seed
    );

    records
}

/// Writes records as JSON to `path`.
///
/// # Errors
///
/// Returns [`GenerateError`] if serialization or the file write fails.
pub fn write_records(path: &Path, records: &[CancerRecord]) -> Result<(), GenerateError> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer(&mut file, records)?;
    file.write_all(b"\n")?;
    Ok(())
}
