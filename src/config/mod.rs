//! Configuration for the explorer.
//!
//! Settings come from an optional `.ssd-explorer.toml`, discovered by
//! walking up from the working directory, or from the user config
//! directory. Every section is optional; missing values use defaults.

mod core;
mod loader;

pub use self::core::{CatalogConfig, ExplorerConfig, OutputConfig, QueryConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
