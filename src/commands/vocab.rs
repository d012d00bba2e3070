use super::session::Session;
use crate::query::Facet;
use anyhow::Result;
use std::io::Write;

pub fn run_vocab<W: Write>(session: &Session, facet: Facet, out: W) -> Result<()> {
    let catalog = session.load_catalog()?;
    let values = catalog.vocabulary(facet);
    let mut writer = session.writer(out);
    writer.write_vocabulary(facet, &values)
}
