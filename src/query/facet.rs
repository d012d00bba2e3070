//! Facet definitions and the user's current multi-select state.
//!
//! An empty selection for a facet means the facet does not restrict
//! the result. It never means "match nothing".

use crate::errors::Error;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An independently selectable filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Brand,
    Category,
    Capacity,
    Interface,
    NandType,
}

impl Facet {
    /// Get all facets in display order
    pub fn all() -> &'static [Facet] {
        &[
            Facet::Brand,
            Facet::Category,
            Facet::Capacity,
            Facet::Interface,
            Facet::NandType,
        ]
    }

    /// Machine name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Facet::Brand => "brand",
            Facet::Category => "category",
            Facet::Capacity => "capacity",
            Facet::Interface => "interface",
            Facet::NandType => "nand_type",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::Brand => "Brands",
            Facet::Category => "Categories",
            Facet::Capacity => "Capacity",
            Facet::Interface => "Interface",
            Facet::NandType => "NAND Type",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "brand" | "brands" => Ok(Facet::Brand),
            "category" | "categories" => Ok(Facet::Category),
            "capacity" | "capacities" => Ok(Facet::Capacity),
            "interface" | "interfaces" => Ok(Facet::Interface),
            "nand_type" | "nand_types" | "nand" => Ok(Facet::NandType),
            _ => Err(Error::UnknownFacet(s.to_string())),
        }
    }
}

/// Current filter choices: one selected-value set per facet plus the
/// free-text search string.
///
/// The state does not validate values against the catalog vocabularies.
/// A value nothing carries simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    brands: BTreeSet<String>,
    categories: BTreeSet<String>,
    capacities: BTreeSet<String>,
    interfaces: BTreeSet<String>,
    nand_types: BTreeSet<String>,
    search: String,
}

impl FacetSelection {
    /// Create an unrestricted selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected values for a facet
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Brand => &self.brands,
            Facet::Category => &self.categories,
            Facet::Capacity => &self.capacities,
            Facet::Interface => &self.interfaces,
            Facet::NandType => &self.nand_types,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Brand => &mut self.brands,
            Facet::Category => &mut self.categories,
            Facet::Capacity => &mut self.capacities,
            Facet::Interface => &mut self.interfaces,
            Facet::NandType => &mut self.nand_types,
        }
    }

    /// Add the value if absent, remove it if present.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        let set = self.selected_mut(facet);
        if set.remove(&value) {
            false
        } else {
            set.insert(value);
            true
        }
    }

    /// Check if a value is currently selected
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).contains(value)
    }

    /// Whether the facet currently narrows the result
    pub fn is_restricting(&self, facet: Facet) -> bool {
        !self.selected(facet).is_empty()
    }

    /// Clear every facet and the search string
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Whether nothing is selected and the search is empty
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && Facet::all().iter().all(|f| !self.is_restricting(*f))
    }

    /// Number of selected values, or "All" when the facet is unrestricted
    pub fn summary(&self, facet: Facet) -> String {
        match self.selected(facet).len() {
            0 => "All".to_string(),
            n => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unrestricted() {
        let selection = FacetSelection::default();
        assert!(selection.is_unrestricted());
        for facet in Facet::all() {
            assert!(selection.selected(*facet).is_empty());
        }
        assert_eq!(selection.search(), "");
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = FacetSelection::new();
        assert!(selection.toggle(Facet::Brand, "Samsung"));
        assert!(selection.is_selected(Facet::Brand, "Samsung"));
        assert!(selection.is_restricting(Facet::Brand));

        assert!(!selection.toggle(Facet::Brand, "Samsung"));
        assert!(!selection.is_restricting(Facet::Brand));
        assert_eq!(selection, FacetSelection::default());
    }

    #[test]
    fn test_toggle_is_per_facet() {
        let mut selection = FacetSelection::new();
        selection.toggle(Facet::Category, "Budget");
        assert!(!selection.is_restricting(Facet::Brand));
        assert!(!selection.is_selected(Facet::NandType, "Budget"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut selection = FacetSelection::new();
        selection.toggle(Facet::Brand, "WD");
        selection.toggle(Facet::Capacity, "1TB-2TB");
        selection.toggle(Facet::NandType, "TLC");
        selection.set_search("sn850");
        selection.reset();
        assert!(selection.is_unrestricted());
    }

    #[test]
    fn test_summary() {
        let mut selection = FacetSelection::new();
        assert_eq!(selection.summary(Facet::Brand), "All");
        selection.toggle(Facet::Brand, "WD");
        selection.toggle(Facet::Brand, "Crucial");
        assert_eq!(selection.summary(Facet::Brand), "2");
    }

    #[test]
    fn test_facet_parse() {
        assert_eq!("brand".parse::<Facet>().unwrap(), Facet::Brand);
        assert_eq!("Categories".parse::<Facet>().unwrap(), Facet::Category);
        assert_eq!("nand-type".parse::<Facet>().unwrap(), Facet::NandType);
        assert_eq!("nand".parse::<Facet>().unwrap(), Facet::NandType);
        assert!("color".parse::<Facet>().is_err());
    }

    #[test]
    fn test_facet_names_round_trip() {
        for facet in Facet::all() {
            assert_eq!(facet.name().parse::<Facet>().unwrap(), *facet);
        }
    }
}
