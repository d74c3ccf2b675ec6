//! Prelude module for the Bikeshare Explorer library
//!
//! Re-exports the most commonly used items so a typical integration needs a
//! single `use bikeshare_explorer::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bikeshare_explorer::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let selection = FilterSelection::all_of(City::Chicago);
//!     let dataset = load_filtered_dataset(&selection, Path::new("data"))?;
//!     println!("{} trips loaded", dataset.len());
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Data pipeline
pub use crate::app::{
    load_city, load_filtered_dataset, City, Dataset, Day, FilterSelection, Month,
    OptionalColumns, RawDataPager, TripRecord,
};

// Statistics passes
pub use crate::app::stats::{
    BirthYearStats, DurationAggregate, DurationStats, StationStats, TimeStats, UserStats,
};

// Configuration
pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{DAY_NAMES, DEFAULT_DATA_DIR, ENV_DATA_DIR, MONTH_NAMES, PAGE_SIZE};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};
