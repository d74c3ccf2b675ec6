//! Core application logic for Bikeshare Explorer
//!
//! This module contains the data pipeline: typed models, the dataset loader
//! with its filter engine and raw-data pager, and the statistics passes.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use bikeshare_explorer::app::{load_filtered_dataset, FilterSelection, City, Month};
//! use bikeshare_explorer::app::stats::TimeStats;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let selection = FilterSelection {
//!     city: City::Chicago,
//!     month: Some(Month::June),
//!     day: None,
//! };
//! let dataset = load_filtered_dataset(&selection, Path::new("data"))?;
//!
//! match TimeStats::compute(&dataset) {
//!     Some(stats) => println!("Most common hour: {}", stats.most_common_hour),
//!     None => println!("No trips match the filters."),
//! }
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod models;
pub mod stats;

// Re-export main public API
pub use dataset::{load_city, load_filtered_dataset, Dataset, RawDataPager};
pub use models::{City, Day, FilterSelection, Month, OptionalColumns, TripRecord};
pub use stats::{BirthYearStats, DurationStats, StationStats, TimeStats, UserStats};
