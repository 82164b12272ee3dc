#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived aggregation result types.
//!
//! These are the three read-only outputs the aggregation pipeline hands
//! to the presentation layer: the per-county rollup ([`CountyData`]),
//! the hierarchical region summary tree ([`RegionSummary`]), and the
//! rate range used for the choropleth color scale ([`RateRange`]).
//! All three are rebuilt from scratch on every filter change and are
//! never mutated in place.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Per-county rollup for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyData {
    /// County name.
    pub county: String,
    /// Region the county belongs to.
    pub region: String,
    /// Aggregated case count.
    pub count: u64,
    /// Aggregated population denominator.
    pub population: u64,
    /// Cases per 10,000 population, rounded to one decimal place.
    /// Zero when `population` is zero.
    pub rate: f64,
    /// Five-digit county FIPS code, or empty when the county is not in
    /// the reference table.
    pub fips: String,
}

/// Kind of a node in the region summary tree.
///
/// The tree has a fixed depth: one [`State`](NodeKind::State) root, a
/// single [`Catchment`](NodeKind::Catchment) child plus sibling
/// [`Region`](NodeKind::Region) nodes, and [`County`](NodeKind::County)
/// leaves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    /// The single root node ("California").
    State,
    /// The configured catchment-area rollup, always the first child of
    /// the root.
    Catchment,
    /// A region grouping of counties.
    Region,
    /// A county leaf.
    County,
}

/// A node in the hierarchical region summary tree.
///
/// Invariant: a parent's `count` and `population` equal the sums over
/// its direct children, transitively the sums over all descendant
/// county leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    /// Node display name.
    pub name: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Aggregated case count.
    pub count: u64,
    /// Aggregated population denominator.
    pub population: u64,
    /// Cases per 10,000 population, rounded to one decimal place.
    pub rate: f64,
    /// Child nodes, empty for county leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RegionSummary>,
}

impl RegionSummary {
    /// Sum of `count` over all county-kind leaves beneath this node
    /// (the node's own count for a leaf).
    #[must_use]
    pub fn leaf_count(&self) -> u64 {
        if self.children.is_empty() {
            self.count
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }

    /// Sum of `population` over all county-kind leaves beneath this
    /// node.
    #[must_use]
    pub fn leaf_population(&self) -> u64 {
        if self.children.is_empty() {
            self.population
        } else {
            self.children.iter().map(Self::leaf_population).sum()
        }
    }
}

/// Min/max over all positive county rates, for color-scale domain
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRange {
    /// Smallest positive rate.
    pub min: f64,
    /// Largest positive rate.
    pub max: f64,
}

impl RateRange {
    /// Documented fallback when no county has a positive rate. A
    /// default color-scale domain, not a computed statistic.
    pub const DEFAULT: Self = Self {
        min: 0.0,
        max: 100.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&NodeKind::Catchment).unwrap(),
            "\"catchment\""
        );
        assert_eq!(NodeKind::State.to_string(), "state");
    }

    #[test]
    fn leaf_sums_recurse() {
        let tree = RegionSummary {
            name: "California".to_string(),
            kind: NodeKind::State,
            count: 30,
            population: 600,
            rate: 500.0,
            children: vec![RegionSummary {
                name: "Bay Area".to_string(),
                kind: NodeKind::Region,
                count: 30,
                population: 600,
                rate: 500.0,
                children: vec![
                    RegionSummary {
                        name: "Alameda".to_string(),
                        kind: NodeKind::County,
                        count: 10,
                        population: 200,
                        rate: 500.0,
                        children: Vec::new(),
                    },
                    RegionSummary {
                        name: "Marin".to_string(),
                        kind: NodeKind::County,
                        count: 20,
                        population: 400,
                        rate: 500.0,
                        children: Vec::new(),
                    },
                ],
            }],
        };
        assert_eq!(tree.leaf_count(), 30);
        assert_eq!(tree.leaf_population(), 600);
    }

    #[test]
    fn leaf_children_omitted_from_json() {
        let leaf = RegionSummary {
            name: "Alameda".to_string(),
            kind: NodeKind::County,
            count: 1,
            population: 2,
            rate: 5000.0,
            children: Vec::new(),
        };
        let json = serde_json::to_value(&leaf).unwrap();
        assert!(json.get("children").is_none());
    }

    #[test]
    fn default_rate_range() {
        assert_eq!(RateRange::DEFAULT.min, 0.0);
        assert_eq!(RateRange::DEFAULT.max, 100.0);
    }
}
