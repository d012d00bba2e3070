//! Display helpers for individual record fields.

/// Placeholder for missing values
pub const NOT_AVAILABLE: &str = "N/A";

/// How a read/write speed string should be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeedDisplay {
    /// No speed recorded
    Missing,
    /// Well-formed "<read>/<write>" pair, in MB/s
    ReadWrite { read: String, write: String },
    /// Anything else, shown verbatim
    Raw(String),
}

impl SpeedDisplay {
    /// Single-line rendering
    pub fn to_line(&self) -> String {
        match self {
            SpeedDisplay::Missing => NOT_AVAILABLE.to_string(),
            SpeedDisplay::ReadWrite { read, write } => {
                format!("Read: {} MB/s, Write: {} MB/s", read, write)
            }
            SpeedDisplay::Raw(raw) => raw.clone(),
        }
    }
}

/// Split a speed string into read and write parts.
///
/// Exactly two "/"-separated parts form a read/write pair; any other shape
/// is passed through unchanged.
pub fn format_rw_speed(rw_speed: Option<&str>) -> SpeedDisplay {
    let Some(rw_speed) = rw_speed.filter(|s| !s.is_empty()) else {
        return SpeedDisplay::Missing;
    };

    let parts: Vec<&str> = rw_speed.split('/').collect();
    match parts.as_slice() {
        [read, write] => SpeedDisplay::ReadWrite {
            read: read.to_string(),
            write: write.to_string(),
        },
        _ => SpeedDisplay::Raw(rw_speed.to_string()),
    }
}

/// Capacity listing, or "N/A" when empty
pub fn format_capacities(capacities: &str) -> &str {
    or_na(capacities)
}

/// Value, or "N/A" when empty
pub fn or_na(value: &str) -> &str {
    if value.is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}
