use crate::constants::{DEFAULT_GRAPHQL_URL, DEFAULT_PAGE_SIZE};
use crate::model::retry::RetryConfig;
use crate::presentation::format::ExportFormat;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use std::fmt;
use tracing::debug;

#[derive(Clone, PartialEq, Eq)]
/// Login credentials for a Literal account
pub struct Credentials {
    /// Email address of the account
    pub email: String,
    /// Password of the account
    pub password: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reads `LITERAL_EMAIL` and `LITERAL_PASSWORD`; either may be missing
    #[must_use]
    pub fn from_env() -> (Option<String>, Option<String>) {
        (
            get_env_or_none("LITERAL_EMAIL"),
            get_env_or_none("LITERAL_PASSWORD"),
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Configuration for the GraphQL endpoint
pub struct GraphqlConfig {
    /// Full URL of the GraphQL endpoint
    pub url: String,
    /// Per-request timeout in seconds, none when unset
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Main configuration of the exporter
pub struct Config {
    /// GraphQL endpoint configuration
    pub graphql: GraphqlConfig,
    /// Number of reviews requested per page
    pub page_size: u32,
    /// Retry policy applied to every request
    pub retry: RetryConfig,
    /// Format used when none is given explicitly
    pub export_format: ExportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            graphql: GraphqlConfig {
                url: get_env_or_default("LITERAL_GRAPHQL_URL", String::from(DEFAULT_GRAPHQL_URL)),
                timeout_secs: get_env_or_none("LITERAL_TIMEOUT_SECS"),
            },
            page_size: get_env_or_default("LITERAL_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            retry: RetryConfig::default(),
            export_format: get_env_or_default("LITERAL_EXPORT_FORMAT", ExportFormat::default()),
        }
    }

    /// Configuration pointing at `url` with default paging and no retries
    ///
    /// Does not read the environment.
    #[must_use]
    pub fn with_endpoint(url: impl Into<String>) -> Self {
        Config {
            graphql: GraphqlConfig {
                url: url.into(),
                timeout_secs: None,
            },
            page_size: DEFAULT_PAGE_SIZE,
            retry: RetryConfig::no_retries(),
            export_format: ExportFormat::default(),
        }
    }
}
