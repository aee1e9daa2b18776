/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Literal Export
//!
//! Exports the book ratings of a [Literal](https://literal.club) account to CSV or JSON.
//!
//! The crate logs in against the Literal GraphQL API, walks the paginated
//! `myReviews` query and flattens every review into a [`Rating`](presentation::rating::Rating)
//! record ready to be serialized.
//!
//! ## Example
//!
//! ```ignore
//! use literal_export::prelude::*;
//!
//! let credentials = Credentials::new("reader@example.com", "secret");
//! let mut exporter = Exporter::new(credentials, Config::new())?;
//! exporter.export_ratings(std::io::stdout(), ExportFormat::Csv).await?;
//! ```

/// Application layer: configuration, authentication and the exporter itself
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error types
pub mod error;
/// Request and response models for the GraphQL API
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Export-ready data types
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
