use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use crate::query::{SortDirection, SortField, SortSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExplorerConfig {
    /// Catalog source
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,

    /// Initial query settings
    #[serde(default)]
    pub query: Option<QueryConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    /// Catalog JSON to load instead of the bundled sample
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct QueryConfig {
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorMode,
}

impl ExplorerConfig {
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog.as_ref()?.path.as_deref()
    }

    /// Initial ordering, brand ascending unless configured
    pub fn sort_spec(&self) -> SortSpec {
        self.query
            .map(|q| SortSpec::new(q.sort, q.direction))
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.map(|o| o.format).unwrap_or_default()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.output.map(|o| o.color).unwrap_or_default()
    }

    /// Make a relative catalog path relative to the directory holding the config
    pub(crate) fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(path) = self.catalog.as_mut().and_then(|c| c.path.as_mut()) {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
