use literal_export::application::config::{Config, Credentials};
use literal_export::constants::{DEFAULT_GRAPHQL_URL, DEFAULT_PAGE_SIZE};
use literal_export::model::retry::RetryConfig;
use literal_export::presentation::ExportFormat;
use literal_export::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_missing_variable() {
    let value: u32 = get_env_or_default("LITERAL_EXPORT_TEST_SURELY_UNSET", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_get_env_or_none_missing_variable() {
    let value: Option<u64> = get_env_or_none("LITERAL_EXPORT_TEST_SURELY_UNSET");
    assert!(value.is_none());
}

#[test]
fn test_config_with_endpoint() {
    let config = Config::with_endpoint("http://127.0.0.1:9999/graphql/");

    assert_eq!(config.graphql.url, "http://127.0.0.1:9999/graphql/");
    assert!(config.graphql.timeout_secs.is_none());
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.retry, RetryConfig::no_retries());
    assert_eq!(config.export_format, ExportFormat::Csv);
}

#[test]
fn test_config_new_has_sane_values() {
    let config = Config::new();

    assert!(!config.graphql.url.is_empty());
    assert!(config.page_size > 0);
}

#[test]
fn test_default_endpoint() {
    assert_eq!(DEFAULT_GRAPHQL_URL, "https://literal.club/graphql/");
}

#[test]
fn test_credentials_debug_hides_password() {
    let credentials = Credentials::new("reader@example.com", "hunter2");
    let shown = format!("{credentials:?}");

    assert!(shown.contains("reader@example.com"));
    assert!(!shown.contains("hunter2"));
}
