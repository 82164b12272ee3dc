//! Fetching county `GeoJSON` from the upstream registry API.

use cancer_map_analytics::CancerFilter;

use crate::GeoError;
use crate::geojson::{CountyFeatureCollection, parse_feature_collection};

/// User-Agent sent on upstream requests.
const USER_AGENT: &str = "cancer-map/0.1 (+https://github.com/cancer-map/cancer-map)";

/// Builds a `reqwest::Client` configured for upstream API requests.
///
/// # Errors
///
/// Returns [`GeoError`] if the client cannot be built.
pub fn build_client() -> Result<reqwest::Client, GeoError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(Into::into)
}

/// Fetches the per-county `GeoJSON` feature collection for a filter
/// selection.
///
/// `base_url` is the counties endpoint (e.g.
/// `https://registry.example.org/api/v1/geo/counties`); the filter's
/// specified dimensions are appended as query parameters. One fetch is
/// issued per filter change; superseding a stale in-flight request is
/// the caller's concern.
///
/// # Errors
///
/// Returns [`GeoError`] on request failure, a non-success status, or a
/// payload that is not a feature collection.
pub async fn fetch_counties_geojson(
    client: &reqwest::Client,
    base_url: &str,
    filter: &CancerFilter,
) -> Result<CountyFeatureCollection, GeoError> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(cancer_type) = &filter.cancer_type {
        params.push(("cancer_type", cancer_type.clone()));
    }
    if let Some(breed) = &filter.breed {
        params.push(("breed", breed.clone()));
    }
    if let Some(sex) = filter.sex {
        params.push(("sex", sex.to_string()));
    }

    log::debug!("fetching county GeoJSON from {base_url} with {} params", params.len());

    let body = client
        .get(base_url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_feature_collection(&body)
}
