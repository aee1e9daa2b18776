/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Literal Export Prelude
//!
//! Re-exports the types needed to log in and export ratings.
//!
//! ## Usage
//!
//! ```rust
//! use literal_export::prelude::*;
//!
//! let config = Config::with_endpoint("https://literal.club/graphql/");
//! let credentials = Credentials::new("reader@example.com", "secret");
//! let exporter = Exporter::new(credentials, config);
//! assert!(exporter.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration and credentials
pub use crate::application::config::{Config, Credentials, GraphqlConfig};

/// Retry policy
pub use crate::model::retry::RetryConfig;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, AuthError};

// ============================================================================
// AUTHENTICATION AND EXPORT
// ============================================================================

pub use crate::application::auth::{Auth, Session, SessionState};
pub use crate::application::export::{write_csv, write_json, write_ratings};
pub use crate::application::exporter::Exporter;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::http::GraphqlClient;
pub use crate::model::responses::Profile;
pub use crate::presentation::{ExportFormat, Rating};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use tracing::{debug, error, info, warn};
