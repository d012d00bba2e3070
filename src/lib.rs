//! Faceted search over a catalog of SSD records.
//!
//! The core is the [`query`] engine: capacity normalization, facet
//! predicates, and derived-key ordering over a read-only [`catalog`].
//! Everything else wires it to a command line.
//!
//! ```rust
//! use ssd_explorer::catalog::Catalog;
//! use ssd_explorer::query::{Facet, QueryPipeline, SortField, SortSpec};
//!
//! let catalog = Catalog::bundled()?;
//! let mut pipeline = QueryPipeline::new(catalog, SortSpec::default());
//! pipeline.toggle(Facet::Capacity, "1TB-2TB");
//! pipeline.set_sort(SortField::Throughput);
//! for record in pipeline.results() {
//!     println!("{}", record.display_name());
//! }
//! # Ok::<(), ssd_explorer::errors::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod query;

// Re-export commonly used types
pub use crate::catalog::{Catalog, CatalogRecord, RecordId};
pub use crate::errors::{Error, Result};
pub use crate::query::{
    query_ids, query_result, CapacityRange, Facet, FacetSelection, QueryPipeline, SortDirection,
    SortField, SortSpec,
};
