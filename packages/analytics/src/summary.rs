//! Region summary tree construction.

use std::collections::HashMap;

use cancer_map_analytics_models::{CountyData, NodeKind, RegionSummary};
use cancer_map_geography_models::{CatchmentConfig, counties::STATE_NAME};

use crate::per_10k_rate;

/// Builds the fixed-depth state -> catchment-or-region -> county
/// summary tree from the per-county rollup.
///
/// Counties are grouped by region name; each region node sums its
/// member counties' raw count and population and re-derives its rate,
/// while county leaves carry their own values unchanged. Regions named
/// in `catchment` are nested under a single catchment node, which is
/// always the first child of the "California" state root; every other
/// region (including regions unknown to the reference data) becomes a
/// direct sibling. Parent totals are sums of raw integers, so no
/// rounding drift accumulates up the tree.
///
/// The catchment node is emitted even when no county belongs to it, and
/// an empty input yields a root with zero totals and only the empty
/// catchment child.
#[must_use]
pub fn build_region_summary(
    counties: &[CountyData],
    catchment: &CatchmentConfig,
) -> RegionSummary {
    let mut region_order: Vec<&str> = Vec::new();
    let mut by_region: HashMap<&str, Vec<&CountyData>> = HashMap::new();

    for county in counties {
        let members = by_region.entry(county.region.as_str()).or_default();
        if members.is_empty() {
            region_order.push(county.region.as_str());
        }
        members.push(county);
    }

    let mut catchment_regions: Vec<RegionSummary> = Vec::new();
    let mut other_regions: Vec<RegionSummary> = Vec::new();
    let mut catchment_count = 0u64;
    let mut catchment_population = 0u64;
    let mut total_count = 0u64;
    let mut total_population = 0u64;

    for region in region_order {
        let members = &by_region[region];
        let count: u64 = members.iter().map(|c| c.count).sum();
        let population: u64 = members.iter().map(|c| c.population).sum();

        total_count += count;
        total_population += population;

        let node = RegionSummary {
            name: region.to_string(),
            kind: NodeKind::Region,
            count,
            population,
            rate: per_10k_rate(count, population),
            children: members
                .iter()
                .map(|c| RegionSummary {
                    name: c.county.clone(),
                    kind: NodeKind::County,
                    count: c.count,
                    population: c.population,
                    rate: c.rate,
                    children: Vec::new(),
                })
                .collect(),
        };

        if catchment.contains(region) {
            catchment_count += count;
            catchment_population += population;
            catchment_regions.push(node);
        } else {
            other_regions.push(node);
        }
    }

    let catchment_node = RegionSummary {
        name: catchment.name.clone(),
        kind: NodeKind::Catchment,
        count: catchment_count,
        population: catchment_population,
        rate: per_10k_rate(catchment_count, catchment_population),
        children: catchment_regions,
    };

    let mut children = Vec::with_capacity(1 + other_regions.len());
    children.push(catchment_node);
    children.extend(other_regions);

    RegionSummary {
        name: STATE_NAME.to_string(),
        kind: NodeKind::State,
        count: total_count,
        population: total_population,
        rate: per_10k_rate(total_count, total_population),
        children,
    }
}
