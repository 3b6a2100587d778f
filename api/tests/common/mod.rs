//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header::HeaderName, web};
use chrono::{DateTime, TimeZone, Utc};

use fa_api::AppState;
use fa_core::services::food::FoodNameGenerator;
use fa_core::services::token::{
    CredentialFormat, FixedClock, SigningSecret, TokenService, TokenServiceConfig,
};

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 4, 8, 0, 0).unwrap()
}

pub fn generator() -> FoodNameGenerator {
    FoodNameGenerator::new(
        vec!["Spicy".to_string(), "Golden".to_string()],
        vec!["Taco".to_string(), "Ramen".to_string(), "Pie".to_string()],
    )
    .unwrap()
}

pub fn token_service(format: CredentialFormat) -> (Arc<TokenService>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(start()));
    let config = TokenServiceConfig {
        format,
        ..Default::default()
    };
    let service = TokenService::with_clock(
        &SigningSecret::from_bytes("integration-secret"),
        config,
        clock.clone(),
    );
    (Arc::new(service), clock)
}

/// Bearer-mode state on the `Authorization` header
pub fn bearer_state() -> (web::Data<AppState>, Arc<FixedClock>) {
    let (tokens, clock) = token_service(CredentialFormat::bearer());
    let state = AppState::new(
        tokens,
        generator(),
        actix_web::http::header::AUTHORIZATION,
    );
    (web::Data::new(state), clock)
}

/// Raw-mode state on a custom header
pub fn raw_state(header: &'static str) -> (web::Data<AppState>, Arc<FixedClock>) {
    let (tokens, clock) = token_service(CredentialFormat::Raw);
    let state = AppState::new(tokens, generator(), HeaderName::from_static(header));
    (web::Data::new(state), clock)
}
