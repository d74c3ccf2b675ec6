//! Temporal statistics: most frequent travel times

use crate::app::dataset::Dataset;
use crate::app::stats::frequency;

/// Most frequent month, day of week and start hour of the filtered dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Most common month, lowercase name
    pub most_common_month: String,
    /// Most common day of week, lowercase name
    pub most_common_day: String,
    /// Most common start hour (0-23)
    pub most_common_hour: u32,
}

impl TimeStats {
    /// Compute the pass; `None` when the dataset is empty
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let records = dataset.records();
        Some(Self {
            most_common_month: frequency::mode(records.iter().map(|r| r.month.as_str()))?
                .to_string(),
            most_common_day: frequency::mode(records.iter().map(|r| r.day_of_week.as_str()))?
                .to_string(),
            most_common_hour: frequency::mode(records.iter().map(|r| r.hour))?,
        })
    }
}
