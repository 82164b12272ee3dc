#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation pipeline for the cancer map dashboard.
//!
//! Turns flat per-slice observations into the three read-only outputs
//! the presentation layer consumes: a per-county rollup with computed
//! rates, a state/catchment/region/county summary tree, and the rate
//! range for the choropleth color scale.
//!
//! Every function here is a total, synchronous transformation of its
//! explicit inputs. There is no shared state and nothing to cancel;
//! a filter change upstream simply reruns the whole pipeline over the
//! current record set, which is cheap at the dataset sizes involved
//! (bounded by county x cancer-type x breed x sex).

pub mod aggregate;
pub mod filter;
pub mod range;
pub mod summary;

pub use aggregate::aggregate_by_county;
pub use filter::CancerFilter;
pub use range::rate_range;
pub use summary::build_region_summary;

/// Cases per 10,000 population, rounded to one decimal place.
///
/// Returns 0 when `population` is zero. This is the single rounding
/// rule used for counties, regions, the catchment, and the state root;
/// parents always re-derive their rate from raw integer sums rather
/// than combining already-rounded child rates.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn per_10k_rate(count: u64, population: u64) -> f64 {
    if population == 0 {
        return 0.0;
    }
    (count as f64 / population as f64 * 10_000.0 * 10.0).round() / 10.0
}
