//! Station statistics: most popular stations and trip

use crate::app::dataset::Dataset;
use crate::app::stats::frequency;

/// Most frequent start station, end station and station pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Most commonly used start station
    pub top_start_station: String,
    /// Most commonly used end station
    pub top_end_station: String,
    /// Most frequent (start, end) combination, counted as a composite key
    pub top_trip: (String, String),
}

impl StationStats {
    /// Compute the pass; `None` when the dataset is empty
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let records = dataset.records();
        let top_trip = frequency::mode(
            records
                .iter()
                .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
        )?;

        Some(Self {
            top_start_station: frequency::mode(
                records.iter().map(|r| r.start_station.as_str()),
            )?
            .to_string(),
            top_end_station: frequency::mode(records.iter().map(|r| r.end_station.as_str()))?
                .to_string(),
            top_trip: (top_trip.0.to_string(), top_trip.1.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::stats::test_support::{dataset, trip};

    fn trip_between(row_id: usize, start: &str, end: &str) -> crate::app::models::TripRecord {
        let mut record = trip(row_id, 2017, 1, 2, 8);
        record.start_station = start.to_string();
        record.end_station = end.to_string();
        record
    }

    #[test]
    fn test_most_popular_stations() {
        let dataset = dataset(vec![
            trip_between(0, "Canal St", "State St"),
            trip_between(1, "Canal St", "Clark St"),
            trip_between(2, "Wood St", "State St"),
            trip_between(3, "Canal St", "State St"),
        ]);

        let stats = StationStats::compute(&dataset).unwrap();
        assert_eq!(stats.top_start_station, "Canal St");
        assert_eq!(stats.top_end_station, "State St");
        assert_eq!(
            stats.top_trip,
            ("Canal St".to_string(), "State St".to_string())
        );
    }

    #[test]
    fn test_pair_counted_as_composite_key() {
        // Individually popular stations need not form the top pair
        let dataset = dataset(vec![
            trip_between(0, "A", "X"),
            trip_between(1, "A", "Y"),
            trip_between(2, "B", "Z"),
            trip_between(3, "B", "Z"),
        ]);

        let stats = StationStats::compute(&dataset).unwrap();
        assert_eq!(stats.top_start_station, "A");
        assert_eq!(stats.top_trip, ("B".to_string(), "Z".to_string()));
    }

    #[test]
    fn test_empty_dataset_reports_absence() {
        assert_eq!(StationStats::compute(&dataset(Vec::new())), None);
    }
}
