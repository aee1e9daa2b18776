use literal_export::model::retry::RetryConfig;
use std::time::Duration;

#[test]
fn test_retry_config_no_retries() {
    let config = RetryConfig::no_retries();
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.max_attempts(), 1);
}

#[test]
fn test_retry_config_defaults() {
    let config = RetryConfig {
        max_retry_count: None,
        base_delay_ms: None,
        max_delay_ms: None,
    };
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.max_attempts(), 4);
    assert_eq!(config.base_delay_ms(), 500);
    assert_eq!(config.max_delay_ms(), 10_000);
}

#[test]
fn test_retry_config_with_max_retries_and_delay() {
    let config = RetryConfig::with_max_retries_and_delay(5, 100);
    assert_eq!(config.max_retries(), 5);
    assert_eq!(config.base_delay_ms(), 100);
}

#[test]
fn test_backoff_doubles_until_ceiling() {
    let config = RetryConfig {
        max_retry_count: Some(10),
        base_delay_ms: Some(100),
        max_delay_ms: Some(1_000),
    };
    let delays: Vec<Duration> = (1..=6).map(|retry| config.backoff_delay(retry)).collect();

    assert_eq!(
        delays,
        vec![
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(400),
            Duration::from_millis(800),
            Duration::from_millis(1_000),
            Duration::from_millis(1_000),
        ]
    );
}

#[test]
fn test_backoff_does_not_overflow() {
    let config = RetryConfig {
        max_retry_count: Some(u32::MAX),
        base_delay_ms: Some(u64::MAX / 2),
        max_delay_ms: Some(u64::MAX),
    };
    assert_eq!(config.backoff_delay(u32::MAX), Duration::from_millis(u64::MAX));
    assert_eq!(config.max_attempts(), u32::MAX);
}

#[test]
fn test_backoff_zero_base_delay() {
    let config = RetryConfig::with_max_retries_and_delay(2, 0);
    assert_eq!(config.backoff_delay(1), Duration::ZERO);
    assert_eq!(config.backoff_delay(2), Duration::ZERO);
}

#[test]
fn test_backoff_delay_ms_saturates_at_ceiling() {
    let config = RetryConfig {
        max_retry_count: Some(10),
        base_delay_ms: Some(u64::MAX / 4),
        max_delay_ms: Some(u64::MAX),
    };
    assert_eq!(config.backoff_delay_ms(1), u64::MAX / 4);
    assert_eq!(config.backoff_delay_ms(10), u64::MAX);
    assert_eq!(
        config.backoff_delay(10),
        Duration::from_millis(config.backoff_delay_ms(10))
    );
}

#[test]
fn test_with_max_retries_keeps_default_delays() {
    let config = RetryConfig::with_max_retries(5);
    assert_eq!(config.max_retries(), 5);
    assert_eq!(config.max_attempts(), 6);
    assert_eq!(config.base_delay_ms(), 500);
    assert_eq!(config.max_delay_ms(), 10_000);
}
