use crate::catalog::Catalog;
use crate::config::ExplorerConfig;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{create_writer, OutputFormat, OutputWriter};
use crate::query::QueryPipeline;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Resolved settings for one command invocation.
///
/// Command-line flags win over the config file, which wins over defaults.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: ExplorerConfig,
    pub catalog_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

impl Session {
    pub fn new(
        config: ExplorerConfig,
        catalog: Option<PathBuf>,
        format: Option<OutputFormat>,
        color: Option<ColorMode>,
    ) -> Self {
        let catalog_path = catalog.or_else(|| config.catalog_path().map(PathBuf::from));
        let format = format.unwrap_or_else(|| config.output_format());
        let formatting = FormattingConfig::from_env(color.unwrap_or_else(|| config.color_mode()));

        Self {
            config,
            catalog_path,
            format,
            formatting,
        }
    }

    /// Load the configured catalog, or the bundled sample
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => Catalog::bundled().context("Bundled catalog is invalid")?,
        };
        info!(
            records = catalog.len(),
            brands = catalog.vocabulary(crate::query::Facet::Brand).len(),
            "catalog ready"
        );
        Ok(catalog)
    }

    /// Fresh query session with the configured initial ordering
    pub fn pipeline(&self) -> Result<QueryPipeline> {
        Ok(QueryPipeline::new(self.load_catalog()?, self.config.sort_spec()))
    }

    pub fn writer<'w, W: Write + 'w>(&self, out: W) -> Box<dyn OutputWriter + 'w> {
        create_writer(self.format, out, self.formatting)
    }
}
