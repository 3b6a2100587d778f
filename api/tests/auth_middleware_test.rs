//! Integration tests for the credential middleware

mod common;

use actix_web::{
    http::{header::HeaderValue, StatusCode},
    test,
};
use chrono::Duration;
use serde_json::Value;

use fa_api::create_app;

async fn error_message(resp: actix_web::dev::ServiceResponse) -> String {
    let body: Value = test::read_body_json(resp).await;
    body["error"].as_str().unwrap_or_default().to_string()
}

#[actix_web::test]
async fn test_missing_header_is_rejected() {
    let (state, _) = common::bearer_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(resp).await, "Please login to access this resource");
}

#[actix_web::test]
async fn test_wrong_scheme_is_rejected() {
    let (state, _) = common::bearer_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", "Basic abc123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        error_message(resp).await,
        "Invalid authentication scheme. Please login."
    );
}

#[actix_web::test]
async fn test_malformed_header_is_rejected() {
    let (state, _) = common::bearer_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", "not-two-tokens"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        error_message(resp).await,
        "Invalid authorization header format. Please login."
    );
}

#[actix_web::test]
async fn test_invalid_token_is_rejected() {
    let (state, _) = common::bearer_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", "Bearer invalid-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(resp).await, "Invalid token. Please login.");
}

#[actix_web::test]
async fn test_valid_then_expired_token() {
    let (state, clock) = common::bearer_state();
    let token = state.tokens.issue("alice").unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "alice");

    clock.advance(Duration::minutes(31));
    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(resp).await, "Token has expired. Please login.");
}

#[actix_web::test]
async fn test_raw_mode_reads_custom_header() {
    let (state, _) = common::raw_state("token");
    let token = state.tokens.issue("bob").unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("token", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "bob");

    // The credential on the wrong header counts as absent
    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(resp).await, "Please login to access this resource");
}

#[actix_web::test]
async fn test_non_utf8_header_is_an_invalid_token() {
    let (state, _) = common::bearer_state();
    let app = test::init_service(create_app(state)).await;

    let value = HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap();
    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", value))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(resp).await, "Invalid token. Please login.");
}

#[actix_web::test]
async fn test_whitespace_only_header_is_malformed() {
    let (state, _) = common::bearer_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", "   "))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        error_message(resp).await,
        "Invalid authorization header format. Please login."
    );
}
