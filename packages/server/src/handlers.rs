//! HTTP handler functions for the cancer map API.

use actix_web::{HttpResponse, web};
use cancer_map_analytics::{
    CancerFilter, aggregate_by_county, build_region_summary, rate_range,
};
use cancer_map_geography_models::counties::REGIONS;
use cancer_map_registry_models::{
    ALL_BREEDS, ALL_SEXES, ALL_TYPES, BREEDS, CANCER_TYPES, RateKind, Sex,
};
use cancer_map_server_models::{
    ApiDashboard, ApiFilterOptions, ApiHealth, ApiSexOption, DashboardQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/filters`
///
/// Returns the reference lists for the dashboard filter controls,
/// sentinel values first.
pub async fn filters() -> HttpResponse {
    let mut cancer_types = vec![ALL_TYPES.to_string()];
    cancer_types.extend(CANCER_TYPES.iter().map(ToString::to_string));

    let mut breeds = vec![ALL_BREEDS.to_string()];
    breeds.extend(BREEDS.iter().map(ToString::to_string));

    let mut sexes = vec![ApiSexOption {
        value: ALL_SEXES.to_string(),
        label: "All".to_string(),
    }];
    sexes.extend(Sex::all().iter().map(|sex| ApiSexOption {
        value: sex.to_string(),
        label: sex.label().to_string(),
    }));

    HttpResponse::Ok().json(ApiFilterOptions {
        cancer_types,
        breeds,
        sexes,
        rate_types: vec![
            RateKind::Incidence.to_string(),
            RateKind::Mortality.to_string(),
        ],
        regions: REGIONS.iter().map(ToString::to_string).collect(),
    })
}

/// `GET /api/counties`
///
/// Returns the per-county rollup for a filter selection.
pub async fn counties(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let filter = filter_from_params(&params);
    let counties = aggregate_by_county(&state.records, &filter, &state.directory);
    HttpResponse::Ok().json(counties)
}

/// `GET /api/dashboard`
///
/// Returns all three pipeline outputs for a filter selection,
/// recomputed together.
pub async fn dashboard(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let filter = filter_from_params(&params);
    let counties = aggregate_by_county(&state.records, &filter, &state.directory);
    let summary = build_region_summary(&counties, &state.catchment);
    let range = rate_range(&counties);

    HttpResponse::Ok().json(ApiDashboard {
        counties,
        summary,
        rate_range: range,
        rate_type: params.rate_type.unwrap_or(RateKind::Incidence),
    })
}

/// Maps query parameters to a core filter, treating sentinel dropdown
/// values as no-constraint.
fn filter_from_params(params: &DashboardQueryParams) -> CancerFilter {
    CancerFilter::from_selection(
        params.cancer_type.as_deref(),
        params.breed.as_deref(),
        params.sex.as_deref(),
    )
}
