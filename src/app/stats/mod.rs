//! Statistics engine
//!
//! Four independent, read-only aggregation passes over a filtered dataset:
//!
//! - [`TimeStats`] - most frequent month, day of week and start hour
//! - [`StationStats`] - most popular start/end stations and station pair
//! - [`DurationStats`] - travel time totals, means and breakdowns
//! - [`UserStats`] - rider counts per category and birth year statistics
//!
//! Every pass takes `&Dataset`, mutates nothing, and returns `None` for an
//! empty dataset - an empty filtered result is a well-defined state, not an
//! error. "Most common" always means the mode with first-seen tie-break
//! implemented in [`frequency`].

pub mod duration;
pub mod frequency;
pub mod station;
pub mod temporal;
pub mod user;

pub use duration::{DurationAggregate, DurationStats};
pub use station::StationStats;
pub use temporal::TimeStats;
pub use user::{BirthYearStats, UserStats};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::app::dataset::Dataset;
    use crate::app::models::{City, OptionalColumns, TripRecord};

    /// Minimal trip fixture; tests adjust public fields as needed
    pub fn trip(row_id: usize, year: i32, month: u32, day: u32, hour: u32) -> TripRecord {
        let start_time = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        TripRecord {
            row_id,
            start_time,
            end_time: None,
            duration_secs: 60,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: TripRecord::month_name(&start_time).to_string(),
            day_of_week: TripRecord::weekday_name(&start_time).to_string(),
            hour,
        }
    }

    pub fn dataset(records: Vec<TripRecord>) -> Dataset {
        Dataset::new(City::Chicago, OptionalColumns::default(), records)
    }

    pub fn dataset_with_columns(columns: OptionalColumns, records: Vec<TripRecord>) -> Dataset {
        Dataset::new(City::Chicago, columns, records)
    }
}
