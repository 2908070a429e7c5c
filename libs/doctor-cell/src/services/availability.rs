use tracing::debug;

use crate::models::{Doctor, DoctorSearchFilters, FilterOutcome};
use crate::services::catalog::Catalog;

pub const NO_MATCHES_ANNOUNCEMENT: &str = "No doctors found matching your filters";
pub const FILTERS_CLEARED_ANNOUNCEMENT: &str = "All filters cleared";

/// Narrows the catalog by specialty, weekday and time slot.
///
/// Every given criterion must hold (logical AND); absent or empty criteria
/// match all doctors. Output keeps catalog order and the function has no
/// side effects, so the same inputs always give the same result.
pub struct AvailabilityFilter;

impl AvailabilityFilter {
    pub fn filter<'a>(catalog: &'a Catalog, filters: &DoctorSearchFilters) -> Vec<&'a Doctor> {
        let doctors: Vec<&Doctor> = catalog
            .doctors()
            .iter()
            .filter(|doctor| filters.matches(doctor))
            .collect();

        debug!(
            "Filter specialty={:?} day={:?} time={:?} matched {} of {} doctors",
            filters.specialty(),
            filters.day(),
            filters.time(),
            doctors.len(),
            catalog.len()
        );

        doctors
    }

    /// Filter and build the live-region announcement for the result
    pub fn apply<'a>(catalog: &'a Catalog, filters: &DoctorSearchFilters) -> FilterOutcome<'a> {
        let doctors = Self::filter(catalog, filters);
        let announcement = Self::announcement(doctors.len());

        FilterOutcome {
            doctors,
            announcement,
        }
    }

    pub fn announcement(match_count: usize) -> String {
        match match_count {
            0 => NO_MATCHES_ANNOUNCEMENT.to_string(),
            1 => "Found 1 doctor matching your filters".to_string(),
            n => format!("Found {} doctors matching your filters", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_pluralisation() {
        assert_eq!(AvailabilityFilter::announcement(0), NO_MATCHES_ANNOUNCEMENT);
        assert_eq!(AvailabilityFilter::announcement(1), "Found 1 doctor matching your filters");
        assert_eq!(AvailabilityFilter::announcement(4), "Found 4 doctors matching your filters");
    }

    #[test]
    fn test_no_criteria_returns_full_catalog_in_order() {
        let catalog = Catalog::default_roster();
        let ids: Vec<&str> = AvailabilityFilter::filter(&catalog, &DoctorSearchFilters::new())
            .into_iter()
            .map(|d| d.id.as_str())
            .collect();

        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_empty_strings_match_all() {
        let catalog = Catalog::default_roster();
        let filters = DoctorSearchFilters::new()
            .with_specialty("")
            .with_day("")
            .with_time("");

        assert!(!filters.has_active_filters());
        assert_eq!(AvailabilityFilter::filter(&catalog, &filters).len(), catalog.len());
    }

    #[test]
    fn test_unknown_value_yields_empty_outcome() {
        let catalog = Catalog::default_roster();
        let outcome = AvailabilityFilter::apply(
            &catalog,
            &DoctorSearchFilters::new().with_day("Sunday"),
        );

        assert!(outcome.is_empty());
        assert_eq!(outcome.announcement, NO_MATCHES_ANNOUNCEMENT);
    }

    #[test]
    fn test_specialty_match_is_exact() {
        let catalog = Catalog::default_roster();

        let lower = DoctorSearchFilters::new().with_specialty("cardiology");
        assert!(AvailabilityFilter::filter(&catalog, &lower).is_empty());

        let exact = DoctorSearchFilters::new().with_specialty("Cardiology");
        let matched = AvailabilityFilter::filter(&catalog, &exact);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "1");
    }
}
