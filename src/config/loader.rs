use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ExplorerConfig;
use crate::errors::{Error, Result};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".ssd-explorer.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read the raw contents of a config file
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ExplorerConfig> {
    let config: ExplorerConfig = toml::from_str(contents)?;

    if let Some(path) = config.catalog_path() {
        if path.as_os_str().is_empty() {
            return Err(Error::configuration("catalog.path must not be empty"));
        }
    }

    Ok(config)
}

/// Try loading config from a specific path, warning on anything but "not found"
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ExplorerConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(mut config) => {
            if let Some(base) = config_path.parent() {
                config.resolve_relative_to(base);
            }
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ssd-explorer").join("config.toml"))
}

/// Load config from an explicit file. Unlike discovery, failures are errors.
pub fn load_config_from(path: &Path) -> Result<ExplorerConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system_with_source("Failed to read config", path, e))?;
    let mut config = parse_and_validate_config(&contents)?;
    if let Some(base) = path.parent() {
        config.resolve_relative_to(base);
    }
    Ok(config)
}

/// Discover configuration: nearest `.ssd-explorer.toml` up the directory
/// tree, then the user config directory, then defaults.
pub fn load_config() -> ExplorerConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ExplorerConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ExplorerConfig::default()
        })
}
