//! Dataset loading, filtering and paging
//!
//! This module owns the trip-log pipeline: reading a city's CSV into typed
//! [`TripRecord`]s with derived calendar columns, narrowing the result by
//! month and day, and exposing the filtered rows in fixed-size windows for
//! raw inspection.
//!
//! # Module Organization
//!
//! - [`loader`] - CSV parsing with required/optional column handling
//! - [`filter`] - month/day equality predicates over derived columns
//! - [`pager`] - fixed-size raw-data windows
//!
//! The [`load_filtered_dataset`] convenience function performs load plus
//! filter atomically and is the boundary handed to the command layer.

pub mod filter;
pub mod loader;
pub mod pager;

use std::path::Path;

use crate::app::models::{City, FilterSelection, OptionalColumns, TripRecord};
use crate::errors::DataSourceResult;

pub use loader::load_city;
pub use pager::RawDataPager;

/// The ordered collection of trip records for one city
///
/// Row order matches the source file and is preserved by filtering. A dataset
/// is owned by a single filter cycle and rebuilt from scratch on restart.
#[derive(Debug, Clone)]
pub struct Dataset {
    city: City,
    columns: OptionalColumns,
    records: Vec<TripRecord>,
}

impl Dataset {
    /// Assemble a dataset from already-parsed records
    ///
    /// Records are expected to carry their derived calendar columns; the
    /// loader is the normal producer.
    pub fn new(city: City, columns: OptionalColumns, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            columns,
            records,
        }
    }

    /// City this dataset was loaded for
    pub fn city(&self) -> City {
        self.city
    }

    /// Which optional columns the source file carries
    pub fn columns(&self) -> OptionalColumns {
        self.columns
    }

    /// All records in source row order
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records match the current filters
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load a city's trip log and apply the month/day filters atomically
///
/// This is the single entry point the command layer uses per filter cycle.
///
/// # Errors
///
/// Returns [`DataSourceError`](crate::errors::DataSourceError) if the source
/// file is missing or unreadable, or a required field cannot be parsed. An
/// empty filtered result is valid and not an error.
pub fn load_filtered_dataset(
    selection: &FilterSelection,
    data_dir: &Path,
) -> DataSourceResult<Dataset> {
    let dataset = loader::load_city(selection.city, data_dir)?;
    Ok(dataset.filtered(selection.month, selection.day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(City::Chicago, OptionalColumns::default(), Vec::new());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.is_empty());
        assert_eq!(dataset.city(), City::Chicago);
        assert!(!dataset.columns().user_type);
    }
}
