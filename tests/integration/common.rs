// Common utilities for integration tests

use literal_export::prelude::*;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

pub const EMAIL: &str = "reader@example.com";
pub const PASSWORD: &str = "correct horse";
pub const TOKEN: &str = "tok-123";
pub const GRAPHQL_PATH: &str = "/graphql/";

/// Config pointing at the mock server, no retries
pub fn test_config(server: &ServerGuard) -> Config {
    setup_logger();
    Config::with_endpoint(format!("{}{}", server.url(), GRAPHQL_PATH))
}

pub fn test_exporter(server: &ServerGuard) -> Exporter {
    Exporter::new(Credentials::new(EMAIL, PASSWORD), test_config(server))
        .expect("Failed to build exporter")
}

/// Successful login response carrying `token`
pub fn login_body(token: &str) -> String {
    json!({
        "data": {
            "login": {
                "token": token,
                "email": EMAIL,
                "languages": ["en"],
                "profile": {
                    "id": "p-1",
                    "handle": "reader",
                    "name": "Avid Reader",
                    "bio": null,
                    "image": null
                }
            }
        }
    })
    .to_string()
}

/// Login mock, not yet created
pub fn login_mock(server: &mut ServerGuard, token: &str) -> Mock {
    server
        .mock("POST", GRAPHQL_PATH)
        .match_body(Matcher::PartialJson(json!({
            "variables": { "email": EMAIL, "password": PASSWORD }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(login_body(token))
}

/// One review entry as the backend wraps it
pub fn review_entry(index: usize) -> Value {
    json!({
        "data": {
            "rating": (index % 5 + 1) as f64,
            "updatedAt": format!("2024-01-{:02}T10:00:00.000Z", index % 28 + 1),
            "text": format!("review {index}"),
            "book": {
                "title": format!("Book {index}"),
                "authors": [
                    { "name": format!("Author {index}") },
                    { "name": "Co Author" }
                ]
            }
        }
    })
}

/// Reviews response holding entries `start..start + count`
pub fn page_body(start: usize, count: usize) -> String {
    let entries: Vec<Value> = (start..start + count).map(review_entry).collect();
    json!({ "data": { "myReviews": entries } }).to_string()
}

/// Mock of the page at `offset`, authorized with `token`, not yet created
pub fn page_mock(
    server: &mut ServerGuard,
    token: &str,
    offset: usize,
    count: usize,
) -> Mock {
    server
        .mock("POST", GRAPHQL_PATH)
        .match_header("authorization", format!("Bearer {token}").as_str())
        .match_body(Matcher::PartialJson(json!({
            "variables": { "limit": DEFAULT_PAGE_SIZE, "offset": offset }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(offset, count))
}
