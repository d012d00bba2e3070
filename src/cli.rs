use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use crate::query::{CapacityRange, Facet, SortField};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssd-explorer")]
#[command(about = "Browse, filter and sort a catalog of SSDs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .ssd-explorer.toml)
    #[arg(long, global = true, env = "SSD_EXPLORER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file (defaults to the configured or bundled catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List SSDs matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show every detail of one SSD
    Show {
        /// Record id (#N) or "Brand Model"
        reference: String,
    },

    /// List the values a facet can take
    Vocab {
        /// Facet name (brand, category, capacity, interface, nand_type)
        facet: Facet,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Facet, search and sort options.
///
/// Each facet flag toggles one value, so repeating a value cancels it.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Toggle a brand filter
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Toggle a category filter
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Toggle a capacity range ("Below 500GB", "500GB-1TB", "1TB-2TB", "2TB-4TB", "Above 4TB")
    #[arg(long = "capacity")]
    pub capacities: Vec<CapacityRange>,

    /// Toggle an interface filter
    #[arg(long = "interface")]
    pub interfaces: Vec<String>,

    /// Toggle a NAND type filter
    #[arg(long = "nand")]
    pub nand_types: Vec<String>,

    /// Case-insensitive search over brand, model and controller
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by field; naming the active field again flips direction
    #[arg(long = "sort")]
    pub sorts: Vec<SortField>,
}

impl FilterArgs {
    /// Facet toggles in the order they are applied
    pub fn toggles(&self) -> Vec<(Facet, String)> {
        let labelled = |facet: Facet, values: &[String]| -> Vec<(Facet, String)> {
            values.iter().map(|v| (facet, v.clone())).collect()
        };

        let mut toggles = labelled(Facet::Brand, &self.brands);
        toggles.extend(labelled(Facet::Category, &self.categories));
        toggles.extend(
            self.capacities
                .iter()
                .map(|range| (Facet::Capacity, range.label().to_string())),
        );
        toggles.extend(labelled(Facet::Interface, &self.interfaces));
        toggles.extend(labelled(Facet::NandType, &self.nand_types));
        toggles
    }
}
