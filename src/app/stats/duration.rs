//! Trip duration statistics

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::app::dataset::Dataset;

/// Sum and arithmetic mean of a group of trip durations, in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct DurationAggregate {
    /// Total travel time
    pub total_secs: u64,
    /// Mean travel time
    pub mean_secs: f64,
}

impl DurationAggregate {
    fn from_totals(total_secs: u64, count: u64) -> Self {
        Self {
            total_secs,
            mean_secs: total_secs as f64 / count as f64,
        }
    }
}

/// Total and mean travel time, with per-user-type and per-hour breakdowns
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Total travel time over all records
    pub total_secs: u64,
    /// Mean travel time over all records
    pub mean_secs: f64,
    /// Per user type, first-seen order; present when the column is published
    pub by_user_type: Option<IndexMap<String, DurationAggregate>>,
    /// Mean travel time per start hour, ascending hour order
    pub mean_by_hour: BTreeMap<u32, f64>,
}

impl DurationStats {
    /// Compute the pass; `None` when the dataset is empty
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let records = dataset.records();
        if records.is_empty() {
            return None;
        }

        let total_secs: u64 = records.iter().map(|r| r.duration_secs).sum();

        let by_user_type = dataset.columns().user_type.then(|| {
            let mut groups: IndexMap<String, (u64, u64)> = IndexMap::new();
            for record in records {
                // Records with a missing value are left out of the grouping
                if let Some(user_type) = &record.user_type {
                    let entry = groups.entry(user_type.clone()).or_insert((0, 0));
                    entry.0 += record.duration_secs;
                    entry.1 += 1;
                }
            }
            groups
                .into_iter()
                .map(|(user_type, (total, count))| {
                    (user_type, DurationAggregate::from_totals(total, count))
                })
                .collect()
        });

        let mut hour_totals: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
        for record in records {
            let entry = hour_totals.entry(record.hour).or_insert((0, 0));
            entry.0 += record.duration_secs;
            entry.1 += 1;
        }
        let mean_by_hour = hour_totals
            .into_iter()
            .map(|(hour, (total, count))| (hour, total as f64 / count as f64))
            .collect();

        Some(Self {
            total_secs,
            mean_secs: total_secs as f64 / records.len() as f64,
            by_user_type,
            mean_by_hour,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{OptionalColumns, TripRecord};
    use crate::app::stats::test_support::{dataset, dataset_with_columns, trip};

    fn subscriber_trip(row_id: usize, user_type: &str, duration_secs: u64) -> TripRecord {
        let mut record = trip(row_id, 2017, 1, 2, 8);
        record.user_type = Some(user_type.to_string());
        record.duration_secs = duration_secs;
        record
    }

    #[test]
    fn test_total_and_mean() {
        let mut first = trip(0, 2017, 1, 2, 8);
        first.duration_secs = 100;
        let mut second = trip(1, 2017, 1, 2, 9);
        second.duration_secs = 200;

        let stats = DurationStats::compute(&dataset(vec![first, second])).unwrap();
        assert_eq!(stats.total_secs, 300);
        assert!((stats.mean_secs - 150.0).abs() < f64::EPSILON);
        assert!(stats.by_user_type.is_none());
    }

    #[test]
    fn test_grouped_by_user_type() {
        let columns = OptionalColumns {
            user_type: true,
            ..Default::default()
        };
        let records = vec![
            subscriber_trip(0, "Subscriber", 100),
            subscriber_trip(1, "Subscriber", 200),
            subscriber_trip(2, "Customer", 300),
        ];

        let stats = DurationStats::compute(&dataset_with_columns(columns, records)).unwrap();
        let by_user_type = stats.by_user_type.unwrap();

        // First-seen group order
        let groups: Vec<&String> = by_user_type.keys().collect();
        assert_eq!(groups, vec!["Subscriber", "Customer"]);

        assert_eq!(by_user_type["Subscriber"].total_secs, 300);
        assert!((by_user_type["Subscriber"].mean_secs - 150.0).abs() < f64::EPSILON);
        assert_eq!(by_user_type["Customer"].total_secs, 300);
        assert!((by_user_type["Customer"].mean_secs - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_user_type_values_left_out() {
        let columns = OptionalColumns {
            user_type: true,
            ..Default::default()
        };
        let mut anonymous = trip(1, 2017, 1, 2, 8);
        anonymous.duration_secs = 500;
        let records = vec![subscriber_trip(0, "Subscriber", 100), anonymous];

        let stats = DurationStats::compute(&dataset_with_columns(columns, records)).unwrap();
        // Whole-dataset totals still include every record
        assert_eq!(stats.total_secs, 600);
        let by_user_type = stats.by_user_type.unwrap();
        assert_eq!(by_user_type.len(), 1);
        assert_eq!(by_user_type["Subscriber"].total_secs, 100);
    }

    #[test]
    fn test_mean_by_hour_ascending() {
        let mut late = trip(0, 2017, 1, 2, 17);
        late.duration_secs = 600;
        let mut early = trip(1, 2017, 1, 2, 8);
        early.duration_secs = 100;
        let mut early_too = trip(2, 2017, 1, 2, 8);
        early_too.duration_secs = 300;

        let stats = DurationStats::compute(&dataset(vec![late, early, early_too])).unwrap();
        let hours: Vec<u32> = stats.mean_by_hour.keys().copied().collect();
        assert_eq!(hours, vec![8, 17]);
        assert!((stats.mean_by_hour[&8] - 200.0).abs() < f64::EPSILON);
        assert!((stats.mean_by_hour[&17] - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_dataset_reports_absence() {
        assert_eq!(DurationStats::compute(&dataset(Vec::new())), None);
    }
}
