use actix_web::{web, HttpResponse};
use fa_core::errors::DomainError;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /login
///
/// Issues a credential for the given username. The password, if any, is not
/// checked.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "anything" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "<jwt>" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty username
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_domain_error(DomainError::Validation {
            message: format!("Invalid login request: {}", errors),
        });
    }

    match state.tokens.issue(&request.username) {
        Ok(token) => {
            log::info!("Issued token for {}", request.username);
            HttpResponse::Ok().json(TokenResponse { token })
        }
        Err(error) => handle_domain_error(error),
    }
}
