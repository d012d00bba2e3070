//! Catalog record type.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identity of a record: its position in the catalog.
///
/// Records are never compared by value, so two records with identical
/// fields still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One storage device entry.
///
/// Field names match the catalog JSON format. String fields that may be
/// `null` or absent in the source data deserialize to an empty string;
/// fields with genuine optional meaning stay `Option`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interface: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub form_factor: String,
    /// Free-form capacity listing, e.g. "512GB / 1TB / 2TB"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub capacities: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub controller: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub configuration: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dram: String,
    /// Host memory buffer flag or description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hmb: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nand_brand: String,
    #[serde(default)]
    pub nand_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layers: String,
    /// Sequential speed as "<read>/<write>" in MB/s
    #[serde(default)]
    pub rw_speed: Option<String>,
    #[serde(default, rename = "categories")]
    pub category: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_page: String,
    #[serde(default)]
    pub product_page_2: Option<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
}

impl CatalogRecord {
    /// Create a record with the identifying fields set and everything else empty.
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// "Brand Model", the text searched alongside the controller.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Category, with empty strings treated as missing.
    pub fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    /// NAND type, with empty strings treated as missing.
    pub fn nand_type(&self) -> Option<&str> {
        non_empty(self.nand_type.as_deref())
    }

    /// Read/write speed, with empty strings treated as missing.
    pub fn rw_speed(&self) -> Option<&str> {
        non_empty(self.rw_speed.as_deref())
    }

    pub fn notes(&self) -> Option<&str> {
        non_empty(self.notes.as_deref())
    }

    /// Primary product link, falling back to the secondary page.
    pub fn product_link(&self) -> Option<&str> {
        non_empty(Some(self.product_page.as_str()))
            .or_else(|| non_empty(self.product_page_2.as_deref()))
    }

    pub fn affiliate_link(&self) -> Option<&str> {
        non_empty(self.affiliate_link.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
