//! Static California county reference table.
//!
//! County names, regions, FIPS codes, and estimated registered dog
//! populations for the counties covered by the registry. Regions are
//! static groupings configured here, not derived from data.

use crate::CountyInfo;

/// Name of the state-level root node in the region summary tree.
pub const STATE_NAME: &str = "California";

/// Display name of the default catchment-area node.
pub const CATCHMENT_NAME: &str = "UC Davis Catchment Area";

/// Regions forming the default catchment area.
pub const CATCHMENT_REGIONS: &[&str] = &["Bay Area", "Northern CA", "Central Valley"];

/// All regions covered by the registry.
pub const REGIONS: &[&str] = &[
    "Bay Area",
    "Northern CA",
    "Central Valley",
    "Central Coast",
    "Southern CA",
];

/// Counties covered by the registry, grouped by region.
pub const CALIFORNIA_COUNTIES: &[CountyInfo] = &[
    // Bay Area
    CountyInfo { name: "Alameda", region: "Bay Area", fips: "06001", population: 145_000 },
    CountyInfo { name: "Contra Costa", region: "Bay Area", fips: "06013", population: 98_000 },
    CountyInfo { name: "Marin", region: "Bay Area", fips: "06041", population: 32_000 },
    CountyInfo { name: "San Francisco", region: "Bay Area", fips: "06075", population: 78_000 },
    CountyInfo { name: "San Mateo", region: "Bay Area", fips: "06081", population: 68_000 },
    CountyInfo { name: "Santa Clara", region: "Bay Area", fips: "06085", population: 165_000 },
    CountyInfo { name: "Sonoma", region: "Bay Area", fips: "06097", population: 52_000 },
    CountyInfo { name: "Napa", region: "Bay Area", fips: "06055", population: 18_000 },
    // Northern CA
    CountyInfo { name: "Butte", region: "Northern CA", fips: "06007", population: 22_000 },
    CountyInfo { name: "Shasta", region: "Northern CA", fips: "06089", population: 19_000 },
    CountyInfo { name: "Humboldt", region: "Northern CA", fips: "06023", population: 14_000 },
    CountyInfo { name: "Mendocino", region: "Northern CA", fips: "06045", population: 9_500 },
    CountyInfo { name: "Del Norte", region: "Northern CA", fips: "06015", population: 3_200 },
    // Central Valley
    CountyInfo { name: "Sacramento", region: "Central Valley", fips: "06067", population: 135_000 },
    CountyInfo { name: "San Joaquin", region: "Central Valley", fips: "06077", population: 62_000 },
    CountyInfo { name: "Fresno", region: "Central Valley", fips: "06019", population: 85_000 },
    CountyInfo { name: "Stanislaus", region: "Central Valley", fips: "06099", population: 48_000 },
    CountyInfo { name: "Kern", region: "Central Valley", fips: "06029", population: 72_000 },
    // Central Coast
    CountyInfo { name: "Monterey", region: "Central Coast", fips: "06053", population: 38_000 },
    CountyInfo { name: "Santa Cruz", region: "Central Coast", fips: "06087", population: 28_000 },
    CountyInfo { name: "San Luis Obispo", region: "Central Coast", fips: "06079", population: 31_000 },
    CountyInfo { name: "Santa Barbara", region: "Central Coast", fips: "06083", population: 42_000 },
    // Southern CA
    CountyInfo { name: "Los Angeles", region: "Southern CA", fips: "06037", population: 890_000 },
    CountyInfo { name: "Orange", region: "Southern CA", fips: "06059", population: 285_000 },
    CountyInfo { name: "San Diego", region: "Southern CA", fips: "06073", population: 295_000 },
    CountyInfo { name: "Riverside", region: "Southern CA", fips: "06065", population: 195_000 },
    CountyInfo { name: "San Bernardino", region: "Southern CA", fips: "06071", population: 175_000 },
    CountyInfo { name: "Ventura", region: "Southern CA", fips: "06111", population: 82_000 },
];
