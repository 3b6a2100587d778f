//! Specific error kinds for credentials, the catalog, food names and
//! external identity providers.

use std::fmt;
use thiserror::Error;

/// Why a scheme-prefixed header was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFault {
    /// Two tokens, but the first is not the expected scheme
    InvalidScheme,
    /// Not exactly two whitespace-separated tokens
    InvalidFormat,
}

impl fmt::Display for HeaderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderFault::InvalidScheme => f.write_str("Invalid authentication scheme. Please login."),
            HeaderFault::InvalidFormat => {
                f.write_str("Invalid authorization header format. Please login.")
            }
        }
    }
}

/// Rejections produced while verifying a presented credential.
///
/// Display yields the user-facing message sent back to the client.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Please login to access this resource")]
    MissingCredential,

    #[error("{0}")]
    MalformedHeader(HeaderFault),

    #[error("Invalid token. Please login.")]
    InvalidToken,

    #[error("Token has expired. Please login.")]
    Expired,
}

/// Item catalog errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Item not found")]
    NotFound { id: usize },
}

/// Food name errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoodError {
    #[error("Invalid food ID")]
    InvalidId { id: i64 },

    #[error("Word list '{list}' is empty")]
    EmptyWordList { list: String },
}

/// Failures talking to an external identity provider
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity provider is not configured")]
    NotConfigured,

    #[error("Authorization code exchange failed: {message}")]
    CodeExchange { message: String },

    #[error("Profile lookup failed: {message}")]
    Profile { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_messages() {
        assert_eq!(
            TokenError::MissingCredential.to_string(),
            "Please login to access this resource"
        );
        assert_eq!(
            TokenError::MalformedHeader(HeaderFault::InvalidScheme).to_string(),
            "Invalid authentication scheme. Please login."
        );
        assert_eq!(
            TokenError::MalformedHeader(HeaderFault::InvalidFormat).to_string(),
            "Invalid authorization header format. Please login."
        );
        assert_eq!(TokenError::InvalidToken.to_string(), "Invalid token. Please login.");
        assert_eq!(TokenError::Expired.to_string(), "Token has expired. Please login.");
    }

    #[test]
    fn test_catalog_and_food_messages() {
        assert_eq!(CatalogError::NotFound { id: 3 }.to_string(), "Item not found");
        assert_eq!(FoodError::InvalidId { id: -1 }.to_string(), "Invalid food ID");
    }
}
