//! Facet vocabularies derived once from the full catalog.

use super::record::CatalogRecord;
use crate::query::{CapacityRange, Facet};
use std::collections::BTreeSet;

/// Distinct non-empty values per facet, sorted ascending.
///
/// Computed from the whole catalog, never from a filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabularies {
    brands: BTreeSet<String>,
    categories: BTreeSet<String>,
    interfaces: BTreeSet<String>,
    nand_types: BTreeSet<String>,
}

impl Vocabularies {
    pub fn from_records(records: &[CatalogRecord]) -> Self {
        let mut vocab = Self::default();
        for record in records {
            insert_non_empty(&mut vocab.brands, Some(record.brand.as_str()));
            insert_non_empty(&mut vocab.categories, record.category());
            insert_non_empty(&mut vocab.interfaces, Some(record.interface.as_str()));
            insert_non_empty(&mut vocab.nand_types, record.nand_type());
        }
        vocab
    }

    /// Values for a facet in display order.
    ///
    /// Capacity has a fixed vocabulary: the five range labels.
    pub fn values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Brand => collect(&self.brands),
            Facet::Category => collect(&self.categories),
            Facet::Interface => collect(&self.interfaces),
            Facet::NandType => collect(&self.nand_types),
            Facet::Capacity => CapacityRange::all().iter().map(|r| r.label()).collect(),
        }
    }
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        if !set.contains(value) {
            set.insert(value.to_string());
        }
    }
}

fn collect(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}
