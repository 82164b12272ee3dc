//! Per-county aggregation of filtered registry records.

use std::collections::HashMap;

use cancer_map_analytics_models::CountyData;
use cancer_map_geography_models::CountyDirectory;
use cancer_map_registry_models::CancerRecord;

use crate::{CancerFilter, per_10k_rate};

/// Running totals for one county while scanning records.
struct CountyAccumulator {
    county: String,
    region: String,
    count: u64,
    population: u64,
}

/// Reduces a record sequence into one [`CountyData`] per county with
/// at least one record matching the filter.
///
/// Records are filtered by `filter`, grouped by county name (output
/// order is the first occurrence of each county in the input), and
/// summed. The region is taken from the first matching record of each
/// county; if upstream data ever disagrees about a county's region,
/// the first-seen region wins. FIPS codes come from `directory`, with
/// an empty string for counties absent from the reference table.
///
/// Counties with no matching records are simply absent from the output;
/// rendering a neutral "no data" visual for them is the presentation
/// layer's contract. Negative counts cannot occur (unsigned input), and
/// a zero summed population yields a zero rate.
#[must_use]
pub fn aggregate_by_county(
    records: &[CancerRecord],
    filter: &CancerFilter,
    directory: &CountyDirectory,
) -> Vec<CountyData> {
    let mut groups: Vec<CountyAccumulator> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| filter.matches(r)) {
        if let Some(&i) = index.get(record.county.as_str()) {
            groups[i].count += u64::from(record.count);
            groups[i].population += u64::from(record.population);
        } else {
            index.insert(record.county.as_str(), groups.len());
            groups.push(CountyAccumulator {
                county: record.county.clone(),
                region: record.region.clone(),
                count: u64::from(record.count),
                population: u64::from(record.population),
            });
        }
    }

    log::debug!(
        "aggregated {} records into {} county groups",
        records.len(),
        groups.len()
    );

    groups
        .into_iter()
        .map(|group| {
            let rate = per_10k_rate(group.count, group.population);
            let fips = directory.fips(&group.county).unwrap_or("").to_string();
            CountyData {
                county: group.county,
                region: group.region,
                count: group.count,
                population: group.population,
                rate,
                fips,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cancer_map_registry_models::Sex;

    fn record(county: &str, region: &str, count: u32, population: u32) -> CancerRecord {
        CancerRecord {
            county: county.to_string(),
            region: region.to_string(),
            cancer_type: "Lymphoma".to_string(),
            breed: "Boxer".to_string(),
            sex: Sex::MaleNeutered,
            count,
            population,
            rate: 0.0,
            year: 2024,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = aggregate_by_county(
            &[],
            &CancerFilter::default(),
            &CountyDirectory::default(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn groups_by_county_in_first_occurrence_order() {
        let records = vec![
            record("Fresno", "Central Valley", 10, 1000),
            record("Alameda", "Bay Area", 5, 500),
            record("Fresno", "Central Valley", 20, 2000),
        ];
        let out = aggregate_by_county(
            &records,
            &CancerFilter::default(),
            &CountyDirectory::default(),
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].county, "Fresno");
        assert_eq!(out[0].count, 30);
        assert_eq!(out[0].population, 3000);
        assert_eq!(out[0].rate, 100.0);
        assert_eq!(out[0].fips, "06019");
        assert_eq!(out[1].county, "Alameda");
        assert_eq!(out[1].fips, "06001");
    }

    #[test]
    fn no_case_lost_or_double_counted() {
        let records: Vec<CancerRecord> = (0..20)
            .map(|i| {
                let county = if i % 3 == 0 { "Alameda" } else { "Fresno" };
                let region = if i % 3 == 0 { "Bay Area" } else { "Central Valley" };
                record(county, region, i, 100 + i)
            })
            .collect();
        let filter = CancerFilter::default();
        let out = aggregate_by_county(&records, &filter, &CountyDirectory::default());
        let total_in: u64 = records
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| u64::from(r.count))
            .sum();
        let total_out: u64 = out.iter().map(|c| c.count).sum();
        assert_eq!(total_in, total_out);
    }

    #[test]
    fn filtered_out_counties_are_absent() {
        let mut lymphoma = record("Alameda", "Bay Area", 5, 500);
        lymphoma.cancer_type = "Lymphoma".to_string();
        let mut melanoma = record("Fresno", "Central Valley", 7, 700);
        melanoma.cancer_type = "Melanoma".to_string();

        let filter = CancerFilter::from_selection(Some("Lymphoma"), None, None);
        let out = aggregate_by_county(
            &[lymphoma, melanoma],
            &filter,
            &CountyDirectory::default(),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].county, "Alameda");
    }

    #[test]
    fn unknown_county_gets_empty_fips() {
        let records = vec![record("Atlantis", "Lost Regions", 3, 300)];
        let out = aggregate_by_county(
            &records,
            &CancerFilter::default(),
            &CountyDirectory::default(),
        );
        assert_eq!(out[0].fips, "");
        assert_eq!(out[0].region, "Lost Regions");
    }

    #[test]
    fn first_seen_region_wins() {
        let records = vec![
            record("Alameda", "Bay Area", 1, 100),
            record("Alameda", "Mislabeled", 2, 200),
        ];
        let out = aggregate_by_county(
            &records,
            &CancerFilter::default(),
            &CountyDirectory::default(),
        );
        assert_eq!(out[0].region, "Bay Area");
        assert_eq!(out[0].count, 3);
    }

    #[test]
    fn zero_population_group_has_zero_rate() {
        let records = vec![record("Alameda", "Bay Area", 9, 0)];
        let out = aggregate_by_county(
            &records,
            &CancerFilter::default(),
            &CountyDirectory::default(),
        );
        assert_eq!(out[0].rate, 0.0);
    }
}
