use super::session::Session;
use crate::cli::FilterArgs;
use crate::io::ResultView;
use crate::query::QueryPipeline;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Replay command-line filter and sort actions onto a pipeline
pub fn apply_filters(pipeline: &mut QueryPipeline, filters: &FilterArgs) {
    for (facet, value) in filters.toggles() {
        let selected = pipeline.toggle(facet, value.clone());
        debug!(facet = %facet, value = %value, selected, "toggled facet value");
    }
    if let Some(search) = &filters.search {
        pipeline.set_search(search.clone());
    }
    for field in &filters.sorts {
        pipeline.set_sort(*field);
    }
}

pub fn run_list<W: Write>(session: &Session, filters: &FilterArgs, out: W) -> Result<()> {
    let mut pipeline = session.pipeline()?;
    apply_filters(&mut pipeline, filters);

    let mut writer = session.writer(out);
    writer.write_results(&ResultView::from_pipeline(&pipeline))
}
