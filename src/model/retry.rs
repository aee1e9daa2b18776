/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_RETRY_MAX_DELAY_MS,
};
use crate::utils::config::get_env_or_none;
use std::time::Duration;

/// Configuration for retrying transient request failures with exponential backoff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt (None = use default 3)
    pub max_retry_count: Option<u32>,
    /// Delay in milliseconds before the first retry (None = use default 500)
    pub base_delay_ms: Option<u64>,
    /// Ceiling in milliseconds for a single delay (None = use default 10000)
    pub max_delay_ms: Option<u64>,
}

impl RetryConfig {
    /// A configuration that never retries
    #[must_use]
    pub fn no_retries() -> Self {
        Self {
            max_retry_count: Some(0),
            base_delay_ms: None,
            max_delay_ms: None,
        }
    }

    /// Creates a retry configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            base_delay_ms: None,
            max_delay_ms: None,
        }
    }

    /// Creates a retry configuration with both max retries and base delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, base_delay_ms: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            base_delay_ms: Some(base_delay_ms),
            max_delay_ms: None,
        }
    }

    /// Gets the maximum retry count
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Total attempts allowed, the first one included
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries().saturating_add(1)
    }

    /// Gets the base delay in milliseconds
    #[must_use]
    pub fn base_delay_ms(&self) -> u64 {
        self.base_delay_ms.unwrap_or(DEFAULT_RETRY_BASE_DELAY_MS)
    }

    /// Gets the delay ceiling in milliseconds
    #[must_use]
    pub fn max_delay_ms(&self) -> u64 {
        self.max_delay_ms.unwrap_or(DEFAULT_RETRY_MAX_DELAY_MS)
    }

    /// Backoff in milliseconds before the given retry (1-based): `base * 2^(retry - 1)`,
    /// capped at the ceiling
    #[must_use]
    pub fn backoff_delay_ms(&self, retry: u32) -> u64 {
        let exponent = retry.saturating_sub(1).min(31);
        self.base_delay_ms()
            .saturating_mul(1u64 << exponent)
            .min(self.max_delay_ms())
    }

    /// Backoff before the given retry as a [`Duration`]
    #[must_use]
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        Duration::from_millis(self.backoff_delay_ms(retry))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: get_env_or_none("LITERAL_MAX_RETRIES"),
            base_delay_ms: get_env_or_none("LITERAL_RETRY_BASE_DELAY_MS"),
            max_delay_ms: get_env_or_none("LITERAL_RETRY_MAX_DELAY_MS"),
        }
    }
}
