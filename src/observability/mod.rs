//! Observability infrastructure.
//!
//! Structured logging through `tracing`. Library code emits events at the
//! edges (catalog load, config discovery, result recomputation); the binary
//! installs the subscriber once at startup.
//!
//! ```ignore
//! use ssd_explorer::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

pub mod tracing;

pub use self::tracing::{init_tracing, verbosity_directive};
