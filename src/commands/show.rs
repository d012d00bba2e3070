use super::session::Session;
use anyhow::{Context, Result};
use std::io::Write;

/// Open one record in the detail view and render it
pub fn run_show<W: Write>(session: &Session, reference: &str, out: W) -> Result<()> {
    let mut pipeline = session.pipeline()?;
    let id = pipeline
        .catalog()
        .find(reference)
        .with_context(|| "Use `ssd-explorer list` to see record ids".to_string())?;
    let record = pipeline
        .select(id)
        .with_context(|| format!("Record {} is not in the catalog", id))?;

    let mut writer = session.writer(out);
    writer.write_detail(id, record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use crate::io::OutputFormat;

    fn session() -> Session {
        Session::new(ExplorerConfig::default(), None, Some(OutputFormat::Json), None)
    }

    #[test]
    fn test_show_renders_selected_record() {
        let mut buf = Vec::new();
        run_show(&session(), "#1", &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["model"], "990 PRO");
    }

    #[test]
    fn test_show_unknown_reference_fails() {
        let mut buf = Vec::new();
        assert!(run_show(&session(), "#9999", &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
