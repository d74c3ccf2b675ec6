//! Raw-data pager
//!
//! Exposes a filtered dataset in fixed windows of
//! [`PAGE_SIZE`](crate::constants::paging::PAGE_SIZE) records. Each call to
//! [`RawDataPager::next_window`] returns the next window and advances the
//! offset; a request past the end yields an empty window. The pager itself is
//! not terminal on an empty window: deciding when to stop is the interactive
//! loop's job.

use crate::app::dataset::Dataset;
use crate::app::models::TripRecord;
use crate::constants::paging::PAGE_SIZE;

/// Fixed-size window cursor over a borrowed dataset
#[derive(Debug)]
pub struct RawDataPager<'a> {
    dataset: &'a Dataset,
    offset: usize,
}

impl<'a> RawDataPager<'a> {
    /// Create a pager positioned at the first record
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset, offset: 0 }
    }

    /// Return the next window of up to [`PAGE_SIZE`] records and advance
    ///
    /// Past the end of the dataset, the returned window is empty.
    pub fn next_window(&mut self) -> &'a [TripRecord] {
        let records = self.dataset.records();
        let start = self.offset.min(records.len());
        let end = (self.offset + PAGE_SIZE).min(records.len());
        self.offset += PAGE_SIZE;
        &records[start..end]
    }

    /// Current offset, in records
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once every record has been returned by a previous window
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.dataset.len()
    }
}
