//! `GeoJSON` feature collection types and the per-county mapping.

use cancer_map_analytics::per_10k_rate;
use cancer_map_analytics_models::CountyData;
use cancer_map_geography_models::CountyDirectory;
use serde::{Deserialize, Serialize};

use crate::GeoError;

/// A county feature collection as served by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountyFeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub collection_type: String,
    /// One feature per county.
    pub features: Vec<CountyFeature>,
}

/// A single county feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountyFeature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub feature_type: String,
    /// Raw geometry, passed through untouched for the map frontend.
    pub geometry: serde_json::Value,
    /// Per-county statistics.
    pub properties: CountyFeatureProperties,
}

/// Statistics carried on each county feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountyFeatureProperties {
    /// County name.
    pub name: String,
    /// Five-digit county FIPS code.
    pub fips_code: String,
    /// County population, when known.
    pub population: Option<u64>,
    /// Total case count.
    pub total_cases: u64,
    /// Cases per 100,000 population, when the upstream could compute
    /// it.
    pub cases_per_capita: Option<f64>,
    /// Most common cancer type in the county, when known.
    pub top_cancer: Option<String>,
}

/// Decodes a `GeoJSON` string into a [`CountyFeatureCollection`].
///
/// # Errors
///
/// Returns [`GeoError::Json`] on malformed JSON and
/// [`GeoError::Conversion`] when the payload is not a feature
/// collection.
pub fn parse_feature_collection(body: &str) -> Result<CountyFeatureCollection, GeoError> {
    let collection: CountyFeatureCollection = serde_json::from_str(body)?;
    if collection.collection_type != "FeatureCollection" {
        return Err(GeoError::Conversion {
            message: format!(
                "expected FeatureCollection, got {}",
                collection.collection_type
            ),
        });
    }
    Ok(collection)
}

/// Maps each feature of an already-per-county collection directly to a
/// [`CountyData`].
///
/// `count` is the feature's `total_cases` and `population` defaults to
/// zero when absent. When `cases_per_capita` is present it is assumed
/// to be per-100,000 and divided by 10 to obtain the per-10k rate;
/// otherwise the standard ratio-and-round rule applies. Regions come
/// from `directory`, degrading to an empty string for counties outside
/// the reference table.
#[must_use]
pub fn counties_from_geojson(
    collection: &CountyFeatureCollection,
    directory: &CountyDirectory,
) -> Vec<CountyData> {
    collection
        .features
        .iter()
        .map(|feature| {
            let props = &feature.properties;
            let population = props.population.unwrap_or(0);
            let rate = props.cases_per_capita.map_or_else(
                || per_10k_rate(props.total_cases, population),
                |per_100k| per_100k / 10.0,
            );
            CountyData {
                county: props.name.clone(),
                region: directory.region(&props.name).unwrap_or("").to_string(),
                count: props.total_cases,
                population,
                rate,
                fips: props.fips_code.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(
        name: &str,
        population: Option<u64>,
        total_cases: u64,
        cases_per_capita: Option<f64>,
    ) -> CountyFeature {
        CountyFeature {
            feature_type: "Feature".to_string(),
            geometry: serde_json::json!({ "type": "MultiPolygon", "coordinates": [] }),
            properties: CountyFeatureProperties {
                name: name.to_string(),
                fips_code: "06001".to_string(),
                population,
                total_cases,
                cases_per_capita,
                top_cancer: None,
            },
        }
    }

    fn collection(features: Vec<CountyFeature>) -> CountyFeatureCollection {
        CountyFeatureCollection {
            collection_type: "FeatureCollection".to_string(),
            features,
        }
    }

    #[test]
    fn per_capita_rate_is_divided_by_ten() {
        let counties = counties_from_geojson(
            &collection(vec![feature("Alameda", Some(10_000), 50, Some(500.0))]),
            &CountyDirectory::default(),
        );
        assert_eq!(counties[0].rate, 50.0);
        assert_eq!(counties[0].count, 50);
        assert_eq!(counties[0].region, "Bay Area");
    }

    #[test]
    fn missing_per_capita_falls_back_to_ratio_rule() {
        let counties = counties_from_geojson(
            &collection(vec![feature("Alameda", Some(15_000), 70, None)]),
            &CountyDirectory::default(),
        );
        assert_eq!(counties[0].rate, 46.7);
    }

    #[test]
    fn missing_population_defaults_to_zero() {
        let counties = counties_from_geojson(
            &collection(vec![feature("Alameda", None, 70, None)]),
            &CountyDirectory::default(),
        );
        assert_eq!(counties[0].population, 0);
        assert_eq!(counties[0].rate, 0.0);
    }

    #[test]
    fn unknown_county_degrades_to_empty_region() {
        let counties = counties_from_geojson(
            &collection(vec![feature("Atlantis", Some(100), 1, None)]),
            &CountyDirectory::default(),
        );
        assert_eq!(counties[0].region, "");
    }

    #[test]
    fn parse_rejects_non_feature_collections() {
        let body = r#"{ "type": "Feature", "features": [] }"#;
        assert!(matches!(
            parse_feature_collection(body),
            Err(GeoError::Conversion { .. })
        ));
    }

    #[test]
    fn parse_accepts_upstream_shape() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "MultiPolygon", "coordinates": [] },
                "properties": {
                    "name": "Fresno",
                    "fips_code": "06019",
                    "population": 85000,
                    "total_cases": 120,
                    "cases_per_capita": 141.18,
                    "top_cancer": "Lymphoma"
                }
            }]
        }"#;
        let collection = parse_feature_collection(body).unwrap();
        assert_eq!(collection.features.len(), 1);
        let counties =
            counties_from_geojson(&collection, &CountyDirectory::default());
        assert_eq!(counties[0].county, "Fresno");
        assert_eq!(counties[0].fips, "06019");
        assert!((counties[0].rate - 14.118).abs() < 1e-9);
    }
}
