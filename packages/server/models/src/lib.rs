#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the cancer map server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the core pipeline types so the API contract can
//! evolve independently of the aggregation internals.

use cancer_map_analytics_models::{CountyData, RateRange, RegionSummary};
use cancer_map_registry_models::RateKind;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters shared by the dashboard and counties endpoints.
///
/// Every dimension is optional; the sentinel dropdown values
/// ("All Types", "All Breeds", "all") are also accepted and mean no
/// constraint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueryParams {
    /// Cancer type name to filter by.
    pub cancer_type: Option<String>,
    /// Breed name to filter by.
    pub breed: Option<String>,
    /// Sex category to filter by (snake_case, e.g. `female_spayed`).
    pub sex: Option<String>,
    /// Which rate the dashboard is displaying. Echoed back; does not
    /// change the aggregation.
    pub rate_type: Option<RateKind>,
}

/// Full dashboard payload: the three pipeline outputs recomputed
/// together for one filter selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDashboard {
    /// Per-county rollup. Counties without matching records are
    /// absent; the map renders those with a neutral "no data" fill.
    pub counties: Vec<CountyData>,
    /// Hierarchical state/catchment/region/county summary tree.
    pub summary: RegionSummary,
    /// Color-scale domain over positive county rates.
    pub rate_range: RateRange,
    /// The rate kind this payload represents.
    pub rate_type: RateKind,
}

/// A labeled sex option for the filter dropdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSexOption {
    /// Machine value (e.g. `male_neutered`, or `all`).
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

/// Reference lists for populating the dashboard filter controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilterOptions {
    /// Cancer type options, sentinel first.
    pub cancer_types: Vec<String>,
    /// Breed options, sentinel first.
    pub breeds: Vec<String>,
    /// Sex options, sentinel first.
    pub sexes: Vec<ApiSexOption>,
    /// Rate toggle options.
    pub rate_types: Vec<String>,
    /// All regions covered by the registry.
    pub regions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_accept_camel_case() {
        let params: DashboardQueryParams = serde_json::from_str(
            r#"{ "cancerType": "Lymphoma", "sex": "female_spayed", "rateType": "mortality" }"#,
        )
        .unwrap();
        assert_eq!(params.cancer_type.as_deref(), Some("Lymphoma"));
        assert_eq!(params.breed, None);
        assert_eq!(params.sex.as_deref(), Some("female_spayed"));
        assert_eq!(params.rate_type, Some(RateKind::Mortality));
    }

    #[test]
    fn dashboard_serializes_camel_case() {
        let payload = ApiDashboard {
            counties: Vec::new(),
            summary: RegionSummary {
                name: "California".to_string(),
                kind: cancer_map_analytics_models::NodeKind::State,
                count: 0,
                population: 0,
                rate: 0.0,
                children: Vec::new(),
            },
            rate_range: RateRange::DEFAULT,
            rate_type: RateKind::Incidence,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("rateRange").is_some());
        assert_eq!(json["rateType"], "incidence");
    }
}
