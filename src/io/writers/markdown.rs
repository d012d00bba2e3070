use crate::catalog::{CatalogRecord, RecordId};
use crate::formatting::{format_capacities, format_rw_speed, or_na};
use crate::io::output::{detail_fields, OutputWriter, ResultView};
use crate::query::Facet;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_filters(&mut self, view: &ResultView<'_>) -> anyhow::Result<()> {
        let filters = view.active_filters();
        if filters.is_empty() && view.selection.search().is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Filters")?;
        writeln!(self.writer)?;
        if !view.selection.search().is_empty() {
            writeln!(self.writer, "- Search: `{}`", view.selection.search())?;
        }
        for (facet, values) in filters {
            writeln!(self.writer, "- {}: {}", facet.display_name(), values.join(", "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Pipes inside cell text would break the table
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, view: &ResultView<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "# SSD Explorer")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", view.summary_line())?;
        writeln!(self.writer)?;
        self.write_filters(view)?;

        if view.entries.is_empty() {
            writeln!(self.writer, "_No SSDs match your filters._")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| # | Brand | Model | Category | Interface | Capacities | Read/Write |"
        )?;
        writeln!(self.writer, "|---|-------|-------|----------|-----------|------------|------------|")?;
        for (id, record) in &view.entries {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                id.0,
                cell(&record.brand),
                cell(&record.model),
                cell(or_na(record.category().unwrap_or_default())),
                cell(or_na(&record.interface)),
                cell(format_capacities(&record.capacities)),
                cell(&format_rw_speed(record.rw_speed()).to_line()),
            )?;
        }
        Ok(())
    }

    fn write_detail(&mut self, _id: RecordId, record: &CatalogRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", record.display_name())?;
        writeln!(self.writer)?;
        if let Some(category) = record.category() {
            writeln!(self.writer, "**{}**", category)?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "| Specification | Value |")?;
        writeln!(self.writer, "|---------------|-------|")?;
        for (label, value) in detail_fields(record) {
            writeln!(self.writer, "| {} | {} |", label, cell(&value))?;
        }

        if let Some(notes) = record.notes() {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Notes")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", notes)?;
        }

        let links: Vec<(&str, &str)> = [
            ("Product Page", record.product_link()),
            ("Buy Now", record.affiliate_link()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label, url)))
        .collect();
        if !links.is_empty() {
            writeln!(self.writer)?;
            for (label, url) in links {
                writeln!(self.writer, "- [{}]({})", label, url)?;
            }
        }
        Ok(())
    }

    fn write_vocabulary(&mut self, facet: Facet, values: &[&str]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", facet.display_name())?;
        writeln!(self.writer)?;
        for value in values {
            writeln!(self.writer, "- {}", value)?;
        }
        Ok(())
    }
}
