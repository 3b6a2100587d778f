use actix_web::{http::header, web, HttpResponse};
use fa_core::errors::{DomainError, IdentityError};

use crate::app::AppState;
use crate::dto::auth::{GoogleCallbackQuery, TokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for GET /auth/google/login
///
/// Redirects to Google's consent screen.
///
/// ## Errors
/// - 503 Service Unavailable: Google login is not configured
pub async fn google_login(state: web::Data<AppState>) -> HttpResponse {
    match &state.identity {
        Some(provider) => HttpResponse::Found()
            .insert_header((header::LOCATION, provider.authorization_url()))
            .finish(),
        None => handle_domain_error(IdentityError::NotConfigured.into()),
    }
}

/// Handler for GET /auth/google/callback?code=...
///
/// Resolves the authorization code to a display name and issues a
/// credential for it.
///
/// ## Errors
/// - 502 Bad Gateway: the code exchange or profile lookup failed
/// - 503 Service Unavailable: Google login is not configured
pub async fn google_callback(
    state: web::Data<AppState>,
    query: web::Query<GoogleCallbackQuery>,
) -> HttpResponse {
    let Some(provider) = &state.identity else {
        return handle_domain_error(IdentityError::NotConfigured.into());
    };

    let result = match provider.resolve_display_name(&query.code).await {
        Ok(name) => state.tokens.issue(&name),
        Err(error) => Err(DomainError::from(error)),
    };

    match result {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => handle_domain_error(error),
    }
}
