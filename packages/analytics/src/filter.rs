//! Filter predicate over registry records.

use std::str::FromStr as _;

use cancer_map_registry_models::{ALL_BREEDS, ALL_SEXES, ALL_TYPES, CancerRecord, Sex};

/// A dashboard filter selection.
///
/// Each dimension is optional; `None` means no constraint. Specified
/// dimensions match by exact, case-sensitive equality against the
/// record's corresponding field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancerFilter {
    /// Cancer type constraint.
    pub cancer_type: Option<String>,
    /// Breed constraint.
    pub breed: Option<String>,
    /// Sex category constraint.
    pub sex: Option<Sex>,
}

impl CancerFilter {
    /// Builds a filter from raw dropdown selections, mapping the
    /// sentinel values ("All Types", "All Breeds", "all") and absent
    /// dimensions to no-constraint. An unparseable sex value is
    /// treated as unconstrained.
    #[must_use]
    pub fn from_selection(
        cancer_type: Option<&str>,
        breed: Option<&str>,
        sex: Option<&str>,
    ) -> Self {
        Self {
            cancer_type: cancer_type
                .filter(|v| *v != ALL_TYPES)
                .map(ToString::to_string),
            breed: breed.filter(|v| *v != ALL_BREEDS).map(ToString::to_string),
            sex: sex
                .filter(|v| *v != ALL_SEXES)
                .and_then(|v| Sex::from_str(v).ok()),
        }
    }

    /// Whether the record passes every specified dimension.
    #[must_use]
    pub fn matches(&self, record: &CancerRecord) -> bool {
        if let Some(cancer_type) = &self.cancer_type
            && record.cancer_type != *cancer_type
        {
            return false;
        }
        if let Some(breed) = &self.breed
            && record.breed != *breed
        {
            return false;
        }
        if let Some(sex) = self.sex
            && record.sex != sex
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cancer_type: &str, breed: &str, sex: Sex) -> CancerRecord {
        CancerRecord {
            county: "Alameda".to_string(),
            region: "Bay Area".to_string(),
            cancer_type: cancer_type.to_string(),
            breed: breed.to_string(),
            sex,
            count: 5,
            population: 1000,
            rate: 50.0,
            year: 2024,
        }
    }

    #[test]
    fn sentinel_selection_passes_every_record() {
        let filter = CancerFilter::from_selection(
            Some(ALL_TYPES),
            Some(ALL_BREEDS),
            Some(ALL_SEXES),
        );
        assert_eq!(filter, CancerFilter::default());
        assert!(filter.matches(&record("Lymphoma", "Boxer", Sex::MaleIntact)));
        assert!(filter.matches(&record("Melanoma", "Poodle", Sex::FemaleSpayed)));
    }

    #[test]
    fn absent_dimensions_pass_every_record() {
        let filter = CancerFilter::from_selection(None, None, None);
        assert!(filter.matches(&record("Lymphoma", "Boxer", Sex::MaleIntact)));
    }

    #[test]
    fn cancer_type_matches_exactly() {
        let filter = CancerFilter::from_selection(Some("Lymphoma"), None, None);
        assert!(filter.matches(&record("Lymphoma", "Boxer", Sex::MaleIntact)));
        assert!(!filter.matches(&record("Melanoma", "Boxer", Sex::MaleIntact)));
        // Case-sensitive, no partial matching.
        assert!(!filter.matches(&record("lymphoma", "Boxer", Sex::MaleIntact)));
        assert!(!filter.matches(&record("Lymphoma B-cell", "Boxer", Sex::MaleIntact)));
    }

    #[test]
    fn breed_and_sex_constrain_together() {
        let filter =
            CancerFilter::from_selection(None, Some("Boxer"), Some("female_spayed"));
        assert!(filter.matches(&record("Lymphoma", "Boxer", Sex::FemaleSpayed)));
        assert!(!filter.matches(&record("Lymphoma", "Boxer", Sex::FemaleIntact)));
        assert!(!filter.matches(&record("Lymphoma", "Poodle", Sex::FemaleSpayed)));
    }

    #[test]
    fn unparseable_sex_is_unconstrained() {
        let filter = CancerFilter::from_selection(None, None, Some("hermaphrodite"));
        assert_eq!(filter.sex, None);
        assert!(filter.matches(&record("Lymphoma", "Boxer", Sex::MaleIntact)));
    }
}
