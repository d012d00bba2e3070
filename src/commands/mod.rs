//! CLI command implementations.
//!
//! Available commands:
//! - **list**: filter, search and sort the catalog
//! - **show**: detail view of one record
//! - **vocab**: values a facet can take
//! - **init**: write a default configuration file
//!
//! Every command runs against a [`Session`] holding the resolved
//! configuration and output settings.

pub mod init;
pub mod list;
pub mod session;
pub mod show;
pub mod vocab;

pub use init::init_config;
pub use list::{apply_filters, run_list};
pub use session::Session;
pub use show::run_show;
pub use vocab::run_vocab;
