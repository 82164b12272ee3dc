#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! California county reference data and region configuration.
//!
//! The aggregation pipeline is a pure function of its inputs, so the
//! static lookup tables (county -> region, county -> FIPS) and the
//! catchment-area region set are passed in explicitly as
//! [`CountyDirectory`] and [`CatchmentConfig`] values rather than read
//! from module-level globals.

pub mod counties;

use serde::{Deserialize, Serialize};

/// Reference data for a single county.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountyInfo {
    /// County name (e.g. "Alameda").
    pub name: &'static str,
    /// Region the county belongs to (e.g. "Bay Area").
    pub region: &'static str,
    /// Five-digit county FIPS code (e.g. "06001").
    pub fips: &'static str,
    /// Estimated registered dog population.
    pub population: u32,
}

/// Lookup table over a set of [`CountyInfo`] entries.
///
/// Defaults to [`counties::CALIFORNIA_COUNTIES`]; tests and alternate
/// deployments can supply their own table.
#[derive(Debug, Clone, Copy)]
pub struct CountyDirectory {
    entries: &'static [CountyInfo],
}

impl CountyDirectory {
    /// Creates a directory over the given reference table.
    #[must_use]
    pub const fn new(entries: &'static [CountyInfo]) -> Self {
        Self { entries }
    }

    /// Looks up a county by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CountyInfo> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Returns the FIPS code for a county, if known.
    #[must_use]
    pub fn fips(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|c| c.fips)
    }

    /// Returns the region for a county, if known.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|c| c.region)
    }

    /// All entries in the directory.
    #[must_use]
    pub const fn entries(&self) -> &'static [CountyInfo] {
        self.entries
    }
}

impl Default for CountyDirectory {
    fn default() -> Self {
        Self::new(counties::CALIFORNIA_COUNTIES)
    }
}

/// A named, configured set of regions rolled up into one aggregate node
/// beneath the state root of the region summary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchmentConfig {
    /// Display name of the catchment node.
    pub name: String,
    /// Region names belonging to the catchment. May be empty, in which
    /// case the catchment node is still emitted with zero totals.
    pub regions: Vec<String>,
}

impl CatchmentConfig {
    /// Whether the given region belongs to this catchment.
    #[must_use]
    pub fn contains(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }
}

impl Default for CatchmentConfig {
    fn default() -> Self {
        Self {
            name: counties::CATCHMENT_NAME.to_string(),
            regions: counties::CATCHMENT_REGIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
