use literal_export::error::{AppError, AuthError};
use reqwest::StatusCode;

#[test]
fn test_auth_error_display_rejected() {
    let error = AuthError::Rejected("Invalid email, Invalid password".to_string());
    assert_eq!(
        error.to_string(),
        "could not login: Invalid email, Invalid password"
    );
}

#[test]
fn test_auth_error_display_invalid_response() {
    let error = AuthError::InvalidResponse {
        status: StatusCode::BAD_GATEWAY,
        body: "<html>".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("502"));
    assert!(text.contains("<html>"));
}

#[test]
fn test_app_error_auth_is_transparent() {
    let error: AppError = AuthError::MissingToken.into();
    assert!(error.is_auth());
    assert_eq!(error.to_string(), "login response carried no token");
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
    assert!(!error.is_auth());
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_graphql() {
    let error = AppError::Graphql("Not authorized".to_string());
    assert_eq!(error.to_string(), "graphql error: Not authorized");
}

#[test]
fn test_app_error_display_partial_export() {
    let error = AppError::PartialExport {
        fetched: 200,
        offset: 200,
        source: Box::new(AppError::RetriesExhausted {
            attempts: 4,
            source: Box::new(AppError::Unexpected(StatusCode::SERVICE_UNAVAILABLE)),
        }),
    };
    let text = error.to_string();
    assert!(text.starts_with("partial export: 200 ratings fetched"));
    assert!(text.contains("gave up after 4 attempts"));
    assert!(text.contains("503"));
}

#[test]
fn test_app_error_source_chain() {
    use std::error::Error;

    let error = AppError::RetriesExhausted {
        attempts: 2,
        source: Box::new(AppError::Unauthorized),
    };
    let source = error.source().expect("missing source");
    assert_eq!(source.to_string(), "unauthorized");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_partial_export_is_handled() {
    let error = AppError::PartialExport {
        fetched: 100,
        offset: 100,
        source: Box::new(AppError::Unexpected(StatusCode::SERVICE_UNAVAILABLE)),
    };
    assert!(!error.is_unhandled());
    assert!(!error.is_auth());
    assert!(error.to_string().starts_with("partial export: 100 ratings fetched"));
}

#[test]
fn test_auth_error_is_handled_and_other_errors_are_not() {
    let auth: AppError = AuthError::MissingToken.into();
    assert!(!auth.is_unhandled());
    assert!(AppError::Unauthorized.is_unhandled());
    assert!(AppError::Unexpected(StatusCode::BAD_GATEWAY).is_unhandled());
}
