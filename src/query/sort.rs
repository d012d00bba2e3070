//! Sort functionality for query results.

use crate::catalog::CatalogRecord;
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a result list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Brand name (alphabetical, default)
    #[default]
    Brand,
    /// Model name (alphabetical)
    Model,
    /// Sequential read speed (numeric)
    #[serde(alias = "rw_speed", alias = "speed")]
    Throughput,
    /// Category label (alphabetical, missing sorts as empty)
    #[serde(alias = "categories")]
    Category,
}

impl SortField {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SortField::Brand => "Brand",
            SortField::Model => "Model",
            SortField::Throughput => "Read/Write Speed",
            SortField::Category => "Category",
        }
    }

    /// Get all sort fields
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Brand,
            SortField::Model,
            SortField::Throughput,
            SortField::Category,
        ]
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brand" => Ok(SortField::Brand),
            "model" => Ok(SortField::Model),
            "throughput" | "rw_speed" | "speed" => Ok(SortField::Throughput),
            "category" | "categories" => Ok(SortField::Category),
            _ => Err(Error::UnknownSortField(s.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply the direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(Error::configuration(format!(
                "invalid sort direction '{}' (expected asc or desc)",
                s
            ))),
        }
    }
}

/// Active (field, direction) pair governing result order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Re-selecting the active field flips direction; a new field starts ascending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Compare two records under this spec
    pub fn compare(&self, a: &CatalogRecord, b: &CatalogRecord) -> Ordering {
        self.direction.apply(compare_by_field(self.field, a, b))
    }
}

/// Leading integer digits of a "<read>/<write>" string, or 0.
///
/// Digit runs too long for `u64` saturate instead of wrapping to 0.
pub fn read_speed(rw_speed: Option<&str>) -> u64 {
    let digits: String = rw_speed
        .unwrap_or_default()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Ascending comparison on a single field
fn compare_by_field(field: SortField, a: &CatalogRecord, b: &CatalogRecord) -> Ordering {
    match field {
        SortField::Brand => a.brand.cmp(&b.brand),
        SortField::Model => a.model.cmp(&b.model),
        SortField::Category => a
            .category()
            .unwrap_or_default()
            .cmp(b.category().unwrap_or_default()),
        SortField::Throughput => read_speed(a.rw_speed()).cmp(&read_speed(b.rw_speed())),
    }
}

/// Sort record indices in place.
///
/// The sort is stable: records comparing equal keep their incoming order.
pub fn sort_indices(indices: &mut [usize], records: &[CatalogRecord], spec: SortSpec) {
    indices.sort_by(|&a, &b| match (records.get(a), records.get(b)) {
        (Some(a), Some(b)) => spec.compare(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    });
}
