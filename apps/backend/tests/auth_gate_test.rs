//! End-to-end tests for the bearer authentication gate.
//!
//! These run without a database: the gate only needs the security config,
//! and the probe handler echoes the authenticated subject.

mod common;
mod support;

use std::time::{Duration, SystemTime};

use actix_web::http::header;
use actix_web::{test, web, HttpResponse};
use backend::middleware::bearer_auth::BearerAuth;
use backend::{mint_access_token, AppState, CurrentUser, SecurityConfig};
use common::assert_error_shape;
use serde_json::Value;
use support::{create_test_app, test_security};

async fn me(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "user_id": user.id }))
}

fn probe_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/private")
            .wrap(BearerAuth)
            .route("/me", web::get().to(me)),
    );
}

async fn gate_app(
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse<
        actix_web::body::EitherBody<actix_web::body::BoxBody>,
    >,
    Error = actix_web::Error,
> {
    create_test_app(AppState::without_db(test_security()))
        .with_routes(probe_routes)
        .build()
        .await
        .expect("test app should build")
}

#[actix_web::test]
async fn valid_token_reaches_handler_with_subject() {
    let app = gate_app().await;

    let token = mint_access_token(7, SystemTime::now(), &test_security()).unwrap();
    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], 7);
}

#[actix_web::test]
async fn missing_header_is_rejected() {
    let app = gate_app().await;

    let req = test::TestRequest::get().uri("/api/private/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_shape(resp, 401, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn malformed_headers_are_rejected() {
    let app = gate_app().await;

    // no scheme, wrong scheme, prefix only, extra space
    for value in ["abc123", "Basic abc123", "Bearer", "Bearer  abc123"] {
        let req = test::TestRequest::get()
            .uri("/api/private/me")
            .insert_header((header::AUTHORIZATION, value))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_shape(resp, 401, "UNAUTHORIZED").await;
    }
}

#[actix_web::test]
async fn token_signed_with_other_secret_is_rejected() {
    let app = gate_app().await;

    let other = SecurityConfig::new("a-different-secret".as_bytes());
    let token = mint_access_token(7, SystemTime::now(), &other).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_shape(resp, 401, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let app = gate_app().await;

    let then = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
    let token = mint_access_token(7, then, &test_security()).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_shape(resp, 401, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn tampered_token_is_rejected() {
    let app = gate_app().await;

    let token = mint_access_token(7, SystemTime::now(), &test_security()).unwrap();
    let (head, sig) = token.rsplit_once('.').unwrap();
    let mut sig_bytes: Vec<u8> = sig.bytes().collect();
    sig_bytes[0] = if sig_bytes[0] == b'A' { b'B' } else { b'A' };
    let tampered = format!("{head}.{}", String::from_utf8(sig_bytes).unwrap());

    let req = test::TestRequest::get()
        .uri("/api/private/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {tampered}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_shape(resp, 401, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn all_failures_look_identical_to_the_client() {
    let app = gate_app().await;

    let expired = {
        let then = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
        mint_access_token(7, then, &test_security()).unwrap()
    };
    let resigned = {
        let other = SecurityConfig::new("a-different-secret".as_bytes());
        mint_access_token(7, SystemTime::now(), &other).unwrap()
    };

    let header_values = [
        None,
        Some("garbage".to_string()),
        Some("Bearer not-a-jwt".to_string()),
        Some(format!("Bearer {expired}")),
        Some(format!("Bearer {resigned}")),
    ];

    let mut bodies = Vec::new();
    for value in header_values {
        let mut req = test::TestRequest::get().uri("/api/private/me");
        if let Some(value) = value {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        bodies.push(assert_error_shape(resp, 401, "UNAUTHORIZED").await);
    }

    // Same error text and code everywhere; only the trace id may differ.
    for body in &bodies[1..] {
        assert_eq!(body["error"], bodies[0]["error"]);
        assert_eq!(body["code"], bodies[0]["code"]);
    }
}
