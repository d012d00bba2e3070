//! Inclusion predicate over a record and the current facet selection.
//!
//! Facets combine with AND; values within one facet combine with OR.
//! Every check is a pure function of its inputs.

use super::capacity::CapacityRange;
use super::facet::{Facet, FacetSelection};
use crate::catalog::CatalogRecord;
use std::collections::BTreeSet;

/// Predicate compiled from a [`FacetSelection`].
///
/// Lowercases the search term and resolves capacity labels once, so
/// evaluating it over a whole catalog does no repeated setup.
#[derive(Debug, Clone)]
pub struct Predicate<'a> {
    selection: &'a FacetSelection,
    search: String,
    capacity_ranges: Vec<CapacityRange>,
}

impl<'a> Predicate<'a> {
    pub fn new(selection: &'a FacetSelection) -> Self {
        // Unknown labels resolve to nothing and therefore never match
        let capacity_ranges = selection
            .selected(Facet::Capacity)
            .iter()
            .filter_map(|label| CapacityRange::from_label(label))
            .collect();

        Self {
            selection,
            search: selection.search().to_lowercase(),
            capacity_ranges,
        }
    }

    /// Check if a record passes every active filter
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        search_matches(record, &self.search)
            && value_matches(Some(record.brand.as_str()), self.selection.selected(Facet::Brand))
            && value_matches(record.category(), self.selection.selected(Facet::Category))
            && self.capacity_matches(record)
            && value_matches(
                Some(record.interface.as_str()),
                self.selection.selected(Facet::Interface),
            )
            && value_matches(record.nand_type(), self.selection.selected(Facet::NandType))
    }

    fn capacity_matches(&self, record: &CatalogRecord) -> bool {
        !self.selection.is_restricting(Facet::Capacity)
            || self
                .capacity_ranges
                .iter()
                .any(|range| range.matches(&record.capacities))
    }
}

/// Check a single record against a selection
pub fn matches(record: &CatalogRecord, selection: &FacetSelection) -> bool {
    Predicate::new(selection).matches(record)
}

/// Case-insensitive substring match on "brand model" or the controller.
///
/// `lowered_term` must already be lowercase. An empty term matches all.
pub fn search_matches(record: &CatalogRecord, lowered_term: &str) -> bool {
    lowered_term.is_empty()
        || record
            .display_name()
            .to_lowercase()
            .contains(lowered_term)
        || record.controller.to_lowercase().contains(lowered_term)
}

/// OR-within-facet membership test.
///
/// An empty selection matches everything, including records missing the
/// field. A restricting selection never matches a missing value.
pub fn value_matches(value: Option<&str>, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str, model: &str) -> CatalogRecord {
        CatalogRecord::new(brand, model)
    }

    #[test]
    fn test_empty_selection_matches_all() {
        let selection = FacetSelection::new();
        assert!(matches(&CatalogRecord::default(), &selection));
        assert!(matches(&record("Samsung", "990 Pro"), &selection));
    }

    #[test]
    fn test_search_on_brand_model_and_controller() {
        let mut evo = record("Samsung", "970 EVO");
        evo.controller = "Phoenix".to_string();
        let mut other = record("Inland", "Premium");
        other.controller = "Phison E12 (970 series)".to_string();
        let plain = record("Crucial", "P3");

        assert!(search_matches(&evo, "970"));
        assert!(search_matches(&other, "970"));
        assert!(!search_matches(&plain, "970"));
        assert!(search_matches(&evo, "samsung 970"));
        assert!(search_matches(&evo, ""));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut selection = FacetSelection::new();
        selection.set_search("EvO");
        assert!(matches(&record("Samsung", "970 evo"), &selection));
    }

    #[test]
    fn test_empty_controller_never_matches_non_empty_term() {
        let r = record("A", "B");
        assert!(!search_matches(&r, "phison"));
    }

    #[test]
    fn test_category_restriction_excludes_missing_category() {
        let mut selection = FacetSelection::new();
        selection.toggle(Facet::Category, "Budget");

        let uncategorized = record("WD", "Blue");
        let mut budget = record("WD", "Green");
        budget.category = Some("Budget".to_string());

        assert!(!matches(&uncategorized, &selection));
        assert!(matches(&budget, &selection));
    }

    #[test]
    fn test_nand_restriction_excludes_missing_nand() {
        let mut selection = FacetSelection::new();
        selection.toggle(Facet::NandType, "TLC");

        let mut tlc = record("Crucial", "T500");
        tlc.nand_type = Some("TLC".to_string());
        let unknown = record("Crucial", "P3");

        assert!(matches(&tlc, &selection));
        assert!(!matches(&unknown, &selection));
    }

    #[test]
    fn test_capacity_any_selected_range() {
        let mut r = record("Samsung", "870 QVO");
        r.capacities = "1TB / 2TB / 4TB / 8TB".to_string();

        let mut selection = FacetSelection::new();
        selection.toggle(Facet::Capacity, "Below 500GB");
        assert!(!matches(&r, &selection));

        selection.toggle(Facet::Capacity, "Above 4TB");
        assert!(matches(&r, &selection));
    }

    #[test]
    fn test_unknown_capacity_label_matches_nothing() {
        let mut r = record("Samsung", "870 QVO");
        r.capacities = "1TB".to_string();
        let mut selection = FacetSelection::new();
        selection.toggle(Facet::Capacity, "Huge");
        assert!(!matches(&r, &selection));
    }

    #[test]
    fn test_and_across_facets() {
        let mut r = record("Kingston", "NV2");
        r.interface = "PCIe 4.0 x4".to_string();
        r.category = Some("Budget".to_string());

        let mut selection = FacetSelection::new();
        selection.toggle(Facet::Category, "Budget");
        selection.toggle(Facet::Interface, "SATA");
        assert!(!matches(&r, &selection));

        selection.toggle(Facet::Interface, "PCIe 4.0 x4");
        assert!(matches(&r, &selection));
    }

    #[test]
    fn test_value_matches() {
        let empty = BTreeSet::new();
        assert!(value_matches(None, &empty));

        let selected: BTreeSet<String> = ["TLC".to_string()].into_iter().collect();
        assert!(value_matches(Some("TLC"), &selected));
        assert!(!value_matches(Some("QLC"), &selected));
        assert!(!value_matches(None, &selected));
    }
}
