//! Catalog query engine.
//!
//! - [`capacity`]: capacity normalization and range buckets
//! - [`facet`]: facet names and the multi-select state
//! - [`filter`]: the inclusion predicate
//! - [`sort`]: sort spec and comparator
//! - [`pipeline`]: filter-then-sort composition and the query session

pub mod capacity;
pub mod facet;
pub mod filter;
pub mod pipeline;
pub mod sort;

pub use capacity::{max_capacity_gb, CapacityRange};
pub use facet::{Facet, FacetSelection};
pub use filter::Predicate;
pub use pipeline::{query_ids, query_result, QueryPipeline};
pub use sort::{SortDirection, SortField, SortSpec};
