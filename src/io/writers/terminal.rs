use crate::catalog::{CatalogRecord, RecordId};
use crate::formatting::{format_capacities, format_rw_speed, or_na, FormattingConfig, OutputFormatter};
use crate::io::output::{detail_fields, OutputWriter, ResultView};
use crate::query::Facet;
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatting.formatter(),
        }
    }

    fn write_filter_summary(&mut self, view: &ResultView<'_>) -> anyhow::Result<()> {
        let parts: Vec<String> = Facet::all()
            .iter()
            .map(|facet| format!("{} ({})", facet.display_name(), view.selection.summary(*facet)))
            .collect();
        writeln!(self.writer, "{}", self.formatter.dim(&parts.join("  ")))?;

        if !view.selection.search().is_empty() {
            writeln!(
                self.writer,
                "{} \"{}\"",
                self.formatter.label("Search:"),
                view.selection.search()
            )?;
        }
        Ok(())
    }

    fn write_entry(&mut self, id: RecordId, record: &CatalogRecord) -> anyhow::Result<()> {
        let category = record
            .category()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        writeln!(
            self.writer,
            "{:>4}  {}{}",
            self.formatter.dim(&id.to_string()),
            self.formatter.highlight(&record.display_name()),
            self.formatter.warning(&category),
        )?;
        writeln!(
            self.writer,
            "      {} | {} | {}",
            or_na(&record.interface),
            format_capacities(&record.capacities),
            format_rw_speed(record.rw_speed()).to_line(),
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, view: &ResultView<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("SSD Explorer"))?;
        self.write_filter_summary(view)?;
        writeln!(
            self.writer,
            "{}  (sorted by {}, {})",
            view.summary_line(),
            view.sort.field.display_name(),
            match view.sort.direction {
                crate::query::SortDirection::Asc => "ascending",
                crate::query::SortDirection::Desc => "descending",
            }
        )?;
        writeln!(self.writer)?;

        if view.entries.is_empty() {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .warning("No SSDs match your filters. Try adjusting your search or reset filters.")
            )?;
            return Ok(());
        }

        for &(id, record) in &view.entries {
            self.write_entry(id, record)?;
        }
        Ok(())
    }

    fn write_detail(&mut self, id: RecordId, record: &CatalogRecord) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.header(&record.display_name()),
            self.formatter.dim(&id.to_string())
        )?;
        if let Some(category) = record.category() {
            writeln!(self.writer, "{}", self.formatter.warning(category))?;
        }
        writeln!(self.writer)?;

        let fields = detail_fields(record);
        let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in fields {
            let padded = format!("{:<width$}", label, width = width);
            writeln!(self.writer, "  {}  {}", self.formatter.label(&padded), value)?;
        }

        if let Some(notes) = record.notes() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", self.formatter.label("Notes"))?;
            writeln!(self.writer, "  {}", notes)?;
        }
        if let Some(link) = record.product_link() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{} {}", self.formatter.label("Product Page:"), link)?;
        }
        if let Some(link) = record.affiliate_link() {
            writeln!(self.writer, "{} {}", self.formatter.label("Buy Now:"), link)?;
        }
        Ok(())
    }

    fn write_vocabulary(&mut self, facet: Facet, values: &[&str]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(facet.display_name()))?;
        for value in values {
            writeln!(self.writer, "  {}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::query::{QueryPipeline, SortSpec};

    fn render(pipeline: &QueryPipeline) -> String {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, FormattingConfig::plain())
            .write_results(&ResultView::from_pipeline(pipeline))
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_results_listing() {
        let mut record = CatalogRecord::new("Crucial", "MX500");
        record.rw_speed = Some("560/510".to_string());
        record.category = Some("Budget".to_string());
        let pipeline = QueryPipeline::new(Catalog::new(vec![record]), SortSpec::default());

        let out = render(&pipeline);
        assert!(out.contains("Showing 1 of 1 SSDs"));
        assert!(out.contains("Brands (All)"));
        assert!(out.contains("Crucial MX500 [Budget]"));
        assert!(out.contains("Read: 560 MB/s, Write: 510 MB/s"));
    }

    #[test]
    fn test_empty_result_message() {
        let mut pipeline = QueryPipeline::new(
            Catalog::new(vec![CatalogRecord::new("WD", "SN770")]),
            SortSpec::default(),
        );
        pipeline.set_search("optane");
        let out = render(&pipeline);
        assert!(out.contains("Showing 0 of 1 SSDs"));
        assert!(out.contains("No SSDs match your filters"));
    }
}
