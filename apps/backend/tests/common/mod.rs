#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Validate the error envelope contract and return the parsed body:
/// expected status, JSON content type, an `x-trace-id` header, and a body
/// whose `error`/`code`/`trace_id` fields are present with `trace_id`
/// matching the header.
pub async fn assert_error_shape<B>(
    resp: ServiceResponse<B>,
    expected_status: u16,
    expected_code: &str,
) -> Value
where
    B: MessageBody,
    B::Error: std::fmt::Debug,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8")
        .to_string();
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], expected_code);
    let error = body["error"].as_str().expect("error field should be a string");
    assert!(!error.is_empty(), "error field should not be empty");
    assert_eq!(
        body["trace_id"].as_str(),
        Some(trace_id.as_str()),
        "trace_id in body should match the x-trace-id header"
    );

    body
}
