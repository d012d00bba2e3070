use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::catalog::{CatalogRecord, RecordId};
use crate::formatting::{format_capacities, format_rw_speed, or_na, FormattingConfig};
use crate::query::{Facet, FacetSelection, QueryPipeline, SortSpec};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

/// Snapshot of a query result ready for rendering
#[derive(Debug, Clone)]
pub struct ResultView<'a> {
    pub entries: Vec<(RecordId, &'a CatalogRecord)>,
    pub total: usize,
    pub sort: SortSpec,
    pub selection: &'a FacetSelection,
}

impl<'a> ResultView<'a> {
    pub fn from_pipeline(pipeline: &'a QueryPipeline) -> Self {
        let catalog = pipeline.catalog();
        let entries = pipeline
            .result_ids()
            .iter()
            .filter_map(|&id| catalog.get(id).map(|record| (id, record)))
            .collect();

        Self {
            entries,
            total: pipeline.total_count(),
            sort: pipeline.sort_spec(),
            selection: pipeline.selection(),
        }
    }

    /// "Showing N of M SSDs"
    pub fn summary_line(&self) -> String {
        format!("Showing {} of {} SSDs", self.entries.len(), self.total)
    }

    /// Active facet filters with their selected values
    pub fn active_filters(&self) -> Vec<(Facet, Vec<&'a str>)> {
        Facet::all()
            .iter()
            .filter(|facet| self.selection.is_restricting(**facet))
            .map(|facet| {
                let values = self
                    .selection
                    .selected(*facet)
                    .iter()
                    .map(String::as_str)
                    .collect();
                (*facet, values)
            })
            .collect()
    }
}

/// Labelled field rows for the detail view
pub fn detail_fields(record: &CatalogRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Interface", or_na(&record.interface).to_string()),
        ("Form Factor", or_na(&record.form_factor).to_string()),
        ("Capacities", format_capacities(&record.capacities).to_string()),
        ("Read/Write Speed", format_rw_speed(record.rw_speed()).to_line()),
        ("Controller", or_na(&record.controller).to_string()),
        ("Configuration", or_na(&record.configuration).to_string()),
        ("DRAM", or_na(&record.dram).to_string()),
        ("HMB", or_na(&record.hmb).to_string()),
        ("NAND Brand", or_na(&record.nand_brand).to_string()),
        ("NAND Type", or_na(record.nand_type().unwrap_or_default()).to_string()),
        ("Layers", or_na(&record.layers).to_string()),
    ]
}

pub trait OutputWriter {
    fn write_results(&mut self, view: &ResultView<'_>) -> anyhow::Result<()>;
    fn write_detail(&mut self, id: RecordId, record: &CatalogRecord) -> anyhow::Result<()>;
    fn write_vocabulary(&mut self, facet: Facet, values: &[&str]) -> anyhow::Result<()>;
}

pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
