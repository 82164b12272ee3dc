#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the cancer map dashboard.
//!
//! Serves the REST API the dashboard frontend consumes: filter
//! reference lists and the aggregated county/summary/rate-range
//! payloads, recomputed per request over an in-memory record store.
//! Records are loaded once at startup, from a JSON file when
//! `RECORDS_PATH` is set, otherwise from the built-in synthetic
//! generator.

mod handlers;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use cancer_map_generate::{GenerateConfig, generate_records};
use cancer_map_geography_models::{CatchmentConfig, CountyDirectory};
use cancer_map_registry_models::CancerRecord;

/// Shared application state.
pub struct AppState {
    /// Immutable record store; every request re-aggregates over it.
    pub records: Vec<CancerRecord>,
    /// County reference table.
    pub directory: CountyDirectory,
    /// Catchment-area configuration for the summary tree.
    pub catchment: CatchmentConfig,
}

/// Loads the record store from `RECORDS_PATH`, falling back to the
/// seeded synthetic generator.
fn load_records(directory: &CountyDirectory) -> Vec<CancerRecord> {
    if let Ok(path) = std::env::var("RECORDS_PATH") {
        log::info!("Loading records from {path}...");
        let body = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
        serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("Failed to parse records from {path}: {e}"))
    } else {
        log::info!("RECORDS_PATH not set, generating synthetic records...");
        generate_records(&GenerateConfig::default(), directory)
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let directory = CountyDirectory::default();
    let records = load_records(&directory);
    log::info!("Loaded {} records", records.len());

    let state = web::Data::new(AppState {
        records,
        directory,
        catchment: CatchmentConfig::default(),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/filters", web::get().to(handlers::filters))
                    .route("/counties", web::get().to(handlers::counties))
                    .route("/dashboard", web::get().to(handlers::dashboard)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
