//! Domain-specific error types and error handling.

mod types;

pub use types::{CatalogError, FoodError, HeaderFault, IdentityError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Food(#[from] FoodError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

pub type DomainResult<T> = Result<T, DomainError>;
