#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County `GeoJSON` ingest from the upstream registry API.
//!
//! The upstream API can serve per-county data as a `GeoJSON` feature
//! collection whose feature properties carry case counts and
//! populations. This crate fetches and decodes that payload and maps
//! each feature directly to a `CountyData`, bypassing the per-record
//! county aggregation since the source is already per-county.

pub mod fetch;
pub mod geojson;

use thiserror::Error;

/// Errors that can occur during geography operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
