/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Login failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login response could not be parsed as JSON
    #[error("unexpected login response ({status}): {body}")]
    InvalidResponse {
        /// HTTP status of the response
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// The backend answered with an error list; messages joined with `", "`
    #[error("could not login: {0}")]
    Rejected(String),
    /// The response parsed but carried no login payload
    #[error("login response carried no token")]
    MissingToken,
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Transport level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Malformed JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading or writing the export sink failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Writing a CSV record failed
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// Interactive prompt failed
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    /// The GraphQL response reported errors or carried no data
    #[error("graphql error: {0}")]
    Graphql(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),
    /// A request kept failing transiently until the retry cap was reached
    #[error("gave up after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Number of attempts made, the first one included
        attempts: u32,
        /// Last failure seen
        source: Box<AppError>,
    },
    /// Pagination stopped before the last page; nothing was exported
    #[error("partial export: {fetched} ratings fetched, page at offset {offset} failed: {source}")]
    PartialExport {
        /// Records fetched before the failing page
        fetched: usize,
        /// Offset of the failing page
        offset: u32,
        /// Cause of the failure
        source: Box<AppError>,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Returns `true` for login failures
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }

    /// Returns `true` for failures the exporter does not report on its own terms
    ///
    /// Login failures and partial exports carry their own message and are
    /// printed as-is.
    #[must_use]
    pub fn is_unhandled(&self) -> bool {
        !matches!(self, AppError::Auth(_) | AppError::PartialExport { .. })
    }
}
