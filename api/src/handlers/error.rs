use actix_web::{error::InternalError, http::StatusCode, HttpResponse};
use fa_core::errors::{CatalogError, DomainError, FoodError, IdentityError, TokenError};

use crate::dto::error::{ErrorResponse, ErrorResponseExt};

/// Builds the 401 error for a rejected credential
pub fn unauthorized(rejection: TokenError) -> actix_web::Error {
    let response =
        ErrorResponse::new(rejection.to_string()).to_response(StatusCode::UNAUTHORIZED);
    InternalError::from_response(rejection, response).into()
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, message) = match &error {
        DomainError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        DomainError::Token(rejection) => (StatusCode::UNAUTHORIZED, rejection.to_string()),
        DomainError::Catalog(CatalogError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, error.to_string())
        }
        DomainError::Food(FoodError::InvalidId { .. }) => {
            (StatusCode::BAD_REQUEST, error.to_string())
        }
        DomainError::Identity(IdentityError::NotConfigured) => {
            (StatusCode::SERVICE_UNAVAILABLE, error.to_string())
        }
        DomainError::Identity(_) => (
            StatusCode::BAD_GATEWAY,
            "Login with the identity provider failed. Please try again.".to_string(),
        ),
        DomainError::Food(FoodError::EmptyWordList { .. }) | DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred".to_string())
        }
    };

    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::debug!("Domain Error: {:?}", error);
    }

    ErrorResponse::new(message).to_response(status)
}
