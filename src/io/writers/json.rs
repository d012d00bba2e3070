use crate::catalog::{CatalogRecord, RecordId};
use crate::io::output::{OutputWriter, ResultView};
use crate::query::{Facet, SortSpec};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    id: RecordId,
    #[serde(flatten)]
    record: &'a CatalogRecord,
}

#[derive(Serialize)]
struct JsonResults<'a> {
    total: usize,
    matched: usize,
    sort: SortSpec,
    search: &'a str,
    filters: BTreeMap<&'static str, Vec<&'a str>>,
    records: Vec<JsonEntry<'a>>,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, view: &ResultView<'_>) -> anyhow::Result<()> {
        let results = JsonResults {
            total: view.total,
            matched: view.entries.len(),
            sort: view.sort,
            search: view.selection.search(),
            filters: view
                .active_filters()
                .into_iter()
                .map(|(facet, values)| (facet.name(), values))
                .collect(),
            records: view
                .entries
                .iter()
                .map(|&(id, record)| JsonEntry { id, record })
                .collect(),
        };
        self.write_json(&results)
    }

    fn write_detail(&mut self, id: RecordId, record: &CatalogRecord) -> anyhow::Result<()> {
        self.write_json(&JsonEntry { id, record })
    }

    fn write_vocabulary(&mut self, facet: Facet, values: &[&str]) -> anyhow::Result<()> {
        let mut map = BTreeMap::new();
        map.insert(facet.name(), values);
        self.write_json(&map)
    }
}
