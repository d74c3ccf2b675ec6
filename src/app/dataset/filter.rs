//! Filter engine
//!
//! Narrows a dataset by month and/or day of week. Both predicates are plain
//! equality checks against the derived lowercase calendar columns, so they
//! commute and compose with logical AND. Row order is preserved and the input
//! dataset is never mutated.

use crate::app::dataset::Dataset;
use crate::app::models::{Day, Month};

impl Dataset {
    /// Produce a new dataset retaining only records matching the predicates
    ///
    /// `None` retains everything for that dimension. An empty result is valid;
    /// the statistics engine reports absence for it rather than failing.
    pub fn filtered(&self, month: Option<Month>, day: Option<Day>) -> Dataset {
        let records = self
            .records()
            .iter()
            .filter(|record| month.map_or(true, |m| record.month == m.name()))
            .filter(|record| day.map_or(true, |d| record.day_of_week == d.name()))
            .cloned()
            .collect();

        Dataset::new(self.city(), self.columns(), records)
    }
}
