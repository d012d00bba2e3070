use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# SSD Explorer Configuration

[catalog]
# Catalog JSON to load instead of the bundled sample.
# Relative paths are resolved against this file's directory.
# path = "ssds.json"

[query]
# brand | model | throughput | category
sort = "brand"
# asc | desc
direction = "asc"

[output]
# terminal | json | markdown
format = "terminal"
# auto | always | never
color = "auto"
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
