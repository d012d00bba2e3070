//! Query pipeline: filter the full catalog, then order the survivors.
//!
//! The free functions are the pure core. [`QueryPipeline`] wraps them in a
//! session that owns the catalog, the facet selection, the sort spec and the
//! detail-view pointer, and recomputes the full result after every mutation.

use super::facet::{Facet, FacetSelection};
use super::filter::Predicate;
use super::sort::{sort_indices, SortField, SortSpec};
use crate::catalog::{Catalog, CatalogRecord, RecordId};
use tracing::{debug, debug_span};

/// Indices of records passing the selection, in catalog order
pub fn filter_indices(records: &[CatalogRecord], selection: &FacetSelection) -> Vec<usize> {
    let predicate = Predicate::new(selection);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Ids of matching records in result order.
///
/// Always re-filters the whole catalog, never a previous result.
pub fn query_ids(catalog: &Catalog, selection: &FacetSelection, sort: SortSpec) -> Vec<RecordId> {
    let records = catalog.records();
    let mut indices = filter_indices(records, selection);
    sort_indices(&mut indices, records, sort);
    indices.into_iter().map(RecordId).collect()
}

/// Matching records in result order
pub fn query_result<'a>(
    catalog: &'a Catalog,
    selection: &FacetSelection,
    sort: SortSpec,
) -> Vec<&'a CatalogRecord> {
    query_ids(catalog, selection, sort)
        .into_iter()
        .filter_map(|id| catalog.get(id))
        .collect()
}

/// Interactive query session over a read-only catalog
#[derive(Debug, Clone)]
pub struct QueryPipeline {
    catalog: Catalog,
    selection: FacetSelection,
    sort: SortSpec,
    /// Current result (ids into the catalog)
    result: Vec<RecordId>,
    /// Record open in the detail view; independent of the result
    selected: Option<RecordId>,
}

impl QueryPipeline {
    /// Create a session with no filters and the given initial ordering
    pub fn new(catalog: Catalog, sort: SortSpec) -> Self {
        let mut pipeline = Self {
            catalog,
            selection: FacetSelection::new(),
            sort,
            result: Vec::new(),
            selected: None,
        };
        pipeline.recompute();
        pipeline
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    /// Toggle a facet value and recompute
    pub fn toggle(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let selected = self.selection.toggle(facet, value);
        self.recompute();
        selected
    }

    /// Clear all facet selections and the search string.
    ///
    /// Ordering and the detail selection are kept.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.recompute();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.selection.set_search(text);
        self.recompute();
    }

    /// Sort by a field, flipping direction if it is already active
    pub fn set_sort(&mut self, field: SortField) {
        self.sort.set_sort(field);
        self.recompute();
    }

    /// Ids of the current result in order
    pub fn result_ids(&self) -> &[RecordId] {
        &self.result
    }

    /// Records of the current result in order
    pub fn results(&self) -> impl Iterator<Item = &CatalogRecord> {
        self.result.iter().filter_map(|&id| self.catalog.get(id))
    }

    /// Number of records in the current result
    pub fn result_count(&self) -> usize {
        self.result.len()
    }

    /// Number of records in the whole catalog
    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Open a record in the detail view and return it.
    ///
    /// Returns `None` and leaves the pointer unchanged if the id is unknown.
    pub fn select(&mut self, id: RecordId) -> Option<&CatalogRecord> {
        let record = self.catalog.get(id)?;
        self.selected = Some(id);
        Some(record)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected
    }

    /// Record open in the detail view, whether or not it is in the result
    pub fn selected(&self) -> Option<&CatalogRecord> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    fn recompute(&mut self) {
        let _span = debug_span!("recompute", sort = ?self.sort).entered();
        self.result = query_ids(&self.catalog, &self.selection, self.sort);
        debug!(
            matched = self.result.len(),
            total = self.catalog.len(),
            "query result recomputed"
        );
    }
}
