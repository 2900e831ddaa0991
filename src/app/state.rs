// UNRaf Academy - app/state.rs
//
// View-owned listing state: the records, the query built from the user's
// controls, the cached filtered view, and the selection.

use crate::core::filter::{self, Query};
use crate::core::model::Record;

/// State of one listing view.
#[derive(Debug, Clone)]
pub struct ListingState<R> {
    /// All records of the listing, in source order.
    pub records: Vec<R>,

    /// Current query.
    pub query: Query,

    /// Indices into `records` that pass `query`, in source order.
    pub filtered_indices: Vec<usize>,

    /// Selected position within `filtered_indices`.
    pub selected_index: Option<usize>,
}

impl<R: Record> ListingState<R> {
    /// Create state showing every record.
    pub fn new(records: Vec<R>) -> Self {
        let filtered_indices = (0..records.len()).collect();
        Self {
            records,
            query: Query::default(),
            filtered_indices,
            selected_index: None,
        }
    }

    /// Recompute filtered indices from current records and query.
    pub fn apply_filters(&mut self) {
        self.filtered_indices = filter::apply_filters(&self.records, &self.query);

        // Clear selection if it is out of range
        if let Some(idx) = self.selected_index {
            if idx >= self.filtered_indices.len() {
                self.selected_index = None;
            }
        }

        tracing::trace!(
            total = self.records.len(),
            visible = self.filtered_indices.len(),
            "Listing re-filtered"
        );
    }

    /// Replace the query and re-filter.
    pub fn set_query(&mut self, query: Query) {
        self.query = query;
        self.apply_filters();
    }

    /// Reset to an empty query.
    pub fn clear_filters(&mut self) {
        self.set_query(Query::default());
    }

    /// Records passing the current query, in source order.
    pub fn visible(&self) -> impl Iterator<Item = &R> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.records.get(idx))
    }

    /// Number of records passing the current query.
    pub fn visible_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Select a position in the filtered view. Out-of-range clears it.
    pub fn select(&mut self, position: usize) {
        self.selected_index = (position < self.filtered_indices.len()).then_some(position);
    }

    /// Get the currently selected record, if any.
    pub fn selected_record(&self) -> Option<&R> {
        self.selected_index
            .and_then(|idx| self.filtered_indices.get(idx))
            .and_then(|&record_idx| self.records.get(record_idx))
    }

    /// Find a record by id.
    pub fn find(&self, id: u32) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }
}
