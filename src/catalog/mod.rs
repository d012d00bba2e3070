//! Read-only SSD catalog.
//!
//! The catalog is loaded once, synchronously, and never mutated. Facet
//! vocabularies are derived at load time.

pub mod record;
pub mod vocabulary;

pub use record::{CatalogRecord, RecordId};
pub use vocabulary::Vocabularies;

use crate::errors::{Error, Result};
use crate::query::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Sample catalog shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Ordered, immutable record collection plus its vocabularies
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    vocabularies: Vocabularies,
}

impl Catalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let vocabularies = Vocabularies::from_records(&records);
        Self {
            records,
            vocabularies,
        }
    }

    /// Decode a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::file_system_with_source("Failed to read catalog", path, e)
        })?;
        let catalog = Self::from_json_str(&contents).map_err(|e| {
            Error::catalog(format!("{}: {}", path.display(), e))
        })?;
        info!(
            path = %path.display(),
            records = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The sample catalog compiled into the crate
    pub fn bundled() -> Result<Self> {
        let catalog = Self::from_json_str(BUNDLED_CATALOG)?;
        debug!(records = catalog.len(), "loaded bundled catalog");
        Ok(catalog)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&CatalogRecord> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty values a facet can take, sorted
    pub fn vocabulary(&self, facet: Facet) -> Vec<&str> {
        self.vocabularies.values(facet)
    }

    /// Resolve a user-typed record reference.
    ///
    /// Accepts `#N` (record id), an exact "Brand Model" name, or a fragment
    /// of the name that identifies exactly one record. Names are compared
    /// case-insensitively, so a bare number is matched as a name.
    pub fn find(&self, reference: &str) -> Result<RecordId> {
        let reference = reference.trim();
        let not_found = || Error::RecordNotFound(reference.to_string());

        if let Some(idx) = reference.strip_prefix('#') {
            return idx
                .parse::<usize>()
                .ok()
                .filter(|&idx| self.get(RecordId(idx)).is_some())
                .map(RecordId)
                .ok_or_else(not_found);
        }

        let needle = reference.to_lowercase();
        let names: Vec<String> = self
            .records
            .iter()
            .map(|r| r.display_name().to_lowercase())
            .collect();

        if let Some(idx) = names.iter().position(|name| *name == needle) {
            return Ok(RecordId(idx));
        }

        let mut partial = names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.contains(&needle));
        match (partial.next(), partial.next()) {
            (Some((idx, _)), None) => Ok(RecordId(idx)),
            _ => Err(not_found()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            CatalogRecord::new("Samsung", "970 EVO"),
            CatalogRecord::new("Samsung", "970 EVO Plus"),
            CatalogRecord::new("Crucial", "P3"),
            CatalogRecord::new("Samsung", "980"),
        ])
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.vocabulary(Facet::Brand).is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(Catalog::from_json_str("{not json").is_err());
        assert!(Catalog::from_json_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = sample();
        assert_eq!(catalog.find("#2").unwrap(), RecordId(2));
        assert_eq!(catalog.find("#0").unwrap(), RecordId(0));
        assert!(catalog.find("#4").is_err());
        assert!(catalog.find("#x").is_err());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = sample();
        assert_eq!(catalog.find("samsung 970 evo").unwrap(), RecordId(0));
        assert_eq!(catalog.find("crucial").unwrap(), RecordId(2));
        // ambiguous fragment
        assert!(catalog.find("970").is_err());
        assert!(catalog.find("Kingston").is_err());
    }

    #[test]
    fn test_bare_number_is_a_name_not_an_id() {
        let catalog = sample();
        assert_eq!(catalog.find("980").unwrap(), RecordId(3));
        // without '#' a number is a name fragment: "3" is Crucial P3, not #3
        assert_eq!(catalog.find("3").unwrap(), RecordId(2));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
