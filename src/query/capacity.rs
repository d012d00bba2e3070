//! Capacity normalization and range bucketing.
//!
//! Capacity listings are free-form ("512GB / 1TB / 2TB", "4TB", "1.92 TB").
//! Every numeric token is converted to gigabytes and the listing is
//! represented by its largest offering. 1 TB is exactly 1024 GB.

use crate::errors::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Gigabytes per terabyte (binary convention).
pub const GB_PER_TB: f64 = 1024.0;

const BELOW_500GB_UPPER: f64 = 500.0;
const ONE_TB: f64 = GB_PER_TB;
const TWO_TB: f64 = 2.0 * GB_PER_TB;
const FOUR_TB: f64 = 4.0 * GB_PER_TB;

// A number optionally followed by the unit token it is tagged with
static CAPACITY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*([A-Za-z]+)?").unwrap());
static UNIT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// One of the fixed capacity buckets used for coarse filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapacityRange {
    /// magnitude < 500 GB
    Below500Gb,
    /// 500 GB <= magnitude <= 1 TB
    From500GbTo1Tb,
    /// 1 TB < magnitude <= 2 TB
    From1TbTo2Tb,
    /// 2 TB < magnitude <= 4 TB
    From2TbTo4Tb,
    /// magnitude > 4 TB
    Above4Tb,
}

impl CapacityRange {
    /// Get all ranges in display order
    pub fn all() -> &'static [CapacityRange] {
        &[
            CapacityRange::Below500Gb,
            CapacityRange::From500GbTo1Tb,
            CapacityRange::From1TbTo2Tb,
            CapacityRange::From2TbTo4Tb,
            CapacityRange::Above4Tb,
        ]
    }

    /// Get the range label
    pub fn label(&self) -> &'static str {
        match self {
            CapacityRange::Below500Gb => "Below 500GB",
            CapacityRange::From500GbTo1Tb => "500GB-1TB",
            CapacityRange::From1TbTo2Tb => "1TB-2TB",
            CapacityRange::From2TbTo4Tb => "2TB-4TB",
            CapacityRange::Above4Tb => "Above 4TB",
        }
    }

    /// Resolve a label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<CapacityRange> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|range| range.label().eq_ignore_ascii_case(label))
    }

    /// Check whether a magnitude in GB falls inside this bucket
    pub fn contains(&self, gigabytes: f64) -> bool {
        match self {
            CapacityRange::Below500Gb => gigabytes < BELOW_500GB_UPPER,
            CapacityRange::From500GbTo1Tb => (BELOW_500GB_UPPER..=ONE_TB).contains(&gigabytes),
            CapacityRange::From1TbTo2Tb => gigabytes > ONE_TB && gigabytes <= TWO_TB,
            CapacityRange::From2TbTo4Tb => gigabytes > TWO_TB && gigabytes <= FOUR_TB,
            CapacityRange::Above4Tb => gigabytes > FOUR_TB,
        }
    }

    /// Check whether a raw capacity listing falls inside this bucket.
    ///
    /// Empty or unparseable listings match no bucket.
    pub fn matches(&self, capacities: &str) -> bool {
        max_capacity_gb(capacities).is_some_and(|gb| self.contains(gb))
    }

    /// The bucket a magnitude belongs to. Buckets are exhaustive and disjoint.
    pub fn for_magnitude(gigabytes: f64) -> Option<CapacityRange> {
        Self::all().iter().copied().find(|range| range.contains(gigabytes))
    }
}

impl fmt::Display for CapacityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CapacityRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| Error::UnknownCapacityRange(s.to_string()))
    }
}

/// Convert a value to gigabytes according to its unit tag.
///
/// Only "TB" (any case) scales; every other unit is taken as GB already.
pub fn to_gigabytes(value: f64, unit: &str) -> f64 {
    if unit.eq_ignore_ascii_case("TB") {
        value * GB_PER_TB
    } else {
        value
    }
}

/// Every capacity offering in a listing, converted to GB, in listing order.
///
/// A number takes the unit written directly after it. A bare number takes
/// the first unit found anywhere in the listing, or GB when there is none.
pub fn capacities_gb(capacities: &str) -> Vec<f64> {
    let fallback_unit = UNIT_TOKEN
        .find(capacities)
        .map(|m| m.as_str())
        .unwrap_or("GB");

    CAPACITY_TOKEN
        .captures_iter(capacities)
        .filter_map(|caps| {
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2).map_or(fallback_unit, |m| m.as_str());
            Some(to_gigabytes(value, unit))
        })
        .collect()
}

/// Representative magnitude of a listing: its largest offering in GB.
///
/// Returns `None` for empty or unparseable listings.
pub fn max_capacity_gb(capacities: &str) -> Option<f64> {
    capacities_gb(capacities).into_iter().reduce(f64::max)
}
