//! Rider demographic statistics

use indexmap::IndexMap;

use crate::app::dataset::Dataset;
use crate::app::stats::frequency;

/// Birth year extremes and mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Earliest birth year
    pub earliest: i32,
    /// Most recent birth year
    pub most_recent: i32,
    /// Most common birth year; ties resolve to the smallest year
    pub most_common: i32,
}

/// Rider counts per category, plus birth year statistics where published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Count per user type, first-seen order; present when the column is published
    pub user_type_counts: Option<IndexMap<String, u64>>,
    /// Count per gender, first-seen order; present when the column is published
    pub gender_counts: Option<IndexMap<String, u64>>,
    /// Birth year stats; `None` when unpublished or no record carries a year
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    /// Compute the pass; `None` when the dataset is empty
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let records = dataset.records();
        if records.is_empty() {
            return None;
        }

        let user_type_counts = dataset.columns().user_type.then(|| {
            frequency::counts(records.iter().filter_map(|r| r.user_type.clone()))
        });
        let gender_counts = dataset
            .columns()
            .gender
            .then(|| frequency::counts(records.iter().filter_map(|r| r.gender.clone())));

        let birth_years = if dataset.columns().birth_year {
            birth_year_stats(records.iter().filter_map(|r| r.birth_year))
        } else {
            None
        };

        Some(Self {
            user_type_counts,
            gender_counts,
            birth_years,
        })
    }
}

/// Min, max and mode of the birth years present
///
/// The mode of a numeric series has no first-seen ordering to lean on, so a
/// frequency tie resolves to the smallest year.
fn birth_year_stats(years: impl Iterator<Item = i32>) -> Option<BirthYearStats> {
    let years: Vec<i32> = years.collect();
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;

    let counts = frequency::counts(years);
    let top_count = *counts.values().max()?;
    let most_common = counts
        .iter()
        .filter(|(_, count)| **count == top_count)
        .map(|(year, _)| *year)
        .min()?;

    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{OptionalColumns, TripRecord};
    use crate::app::stats::test_support::{dataset, dataset_with_columns, trip};

    fn rider(row_id: usize, user_type: &str, gender: &str, birth_year: i32) -> TripRecord {
        let mut record = trip(row_id, 2017, 1, 2, 8);
        record.user_type = Some(user_type.to_string());
        record.gender = Some(gender.to_string());
        record.birth_year = Some(birth_year);
        record
    }

    fn demographic_columns() -> OptionalColumns {
        OptionalColumns {
            user_type: true,
            gender: true,
            birth_year: true,
        }
    }

    #[test]
    fn test_category_counts() {
        let records = vec![
            rider(0, "Subscriber", "Male", 1990),
            rider(1, "Customer", "Female", 1990),
            rider(2, "Subscriber", "Male", 1985),
        ];

        let stats = UserStats::compute(&dataset_with_columns(demographic_columns(), records))
            .unwrap();

        let user_types = stats.user_type_counts.unwrap();
        assert_eq!(user_types["Subscriber"], 2);
        assert_eq!(user_types["Customer"], 1);
        let order: Vec<&String> = user_types.keys().collect();
        assert_eq!(order, vec!["Subscriber", "Customer"]);

        let genders = stats.gender_counts.unwrap();
        assert_eq!(genders["Male"], 2);
        assert_eq!(genders["Female"], 1);
    }

    #[test]
    fn test_birth_year_extremes_and_mode() {
        let records = vec![
            rider(0, "Subscriber", "Male", 1990),
            rider(1, "Subscriber", "Male", 1990),
            rider(2, "Subscriber", "Male", 1985),
        ];

        let stats = UserStats::compute(&dataset_with_columns(demographic_columns(), records))
            .unwrap();
        let birth_years = stats.birth_years.unwrap();
        assert_eq!(birth_years.earliest, 1985);
        assert_eq!(birth_years.most_recent, 1990);
        assert_eq!(birth_years.most_common, 1990);
    }

    #[test]
    fn test_birth_year_mode_tie_takes_smallest_year() {
        let records = vec![
            rider(0, "Subscriber", "Male", 1992),
            rider(1, "Subscriber", "Male", 1985),
            rider(2, "Subscriber", "Male", 1992),
            rider(3, "Subscriber", "Male", 1985),
        ];

        let stats = UserStats::compute(&dataset_with_columns(demographic_columns(), records))
            .unwrap();
        assert_eq!(stats.birth_years.unwrap().most_common, 1985);
    }

    #[test]
    fn test_unpublished_columns_report_absence() {
        let stats = UserStats::compute(&dataset(vec![trip(0, 2017, 1, 2, 8)])).unwrap();
        assert!(stats.user_type_counts.is_none());
        assert!(stats.gender_counts.is_none());
        assert!(stats.birth_years.is_none());
    }

    #[test]
    fn test_published_but_all_missing_birth_years() {
        let mut record = trip(0, 2017, 1, 2, 8);
        record.user_type = Some("Subscriber".to_string());
        let columns = demographic_columns();

        let stats = UserStats::compute(&dataset_with_columns(columns, vec![record])).unwrap();
        assert!(stats.birth_years.is_none());
        // The published column still yields a (possibly empty) counting
        assert_eq!(stats.gender_counts.unwrap().len(), 0);
    }

    #[test]
    fn test_empty_dataset_reports_absence() {
        assert_eq!(UserStats::compute(&dataset(Vec::new())), None);
    }
}
