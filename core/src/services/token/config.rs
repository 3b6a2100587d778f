//! Configuration for the token service

use chrono::Duration;
use fa_shared::config::{AuthConfig, HeaderMode};

use crate::domain::entities::claims::DEFAULT_TOKEN_TTL_MINUTES;

/// Wire shape of a presented credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialFormat {
    /// `<scheme> <credential>`, scheme compared case-insensitively
    Scheme(String),
    /// The value is the credential itself
    Raw,
}

impl CredentialFormat {
    /// The conventional `Bearer <credential>` shape
    pub fn bearer() -> Self {
        CredentialFormat::Scheme(String::from("Bearer"))
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Lifetime applied when `issue` is called without an explicit ttl
    pub default_ttl: Duration,
    /// Accepted header shape
    pub format: CredentialFormat,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
            format: CredentialFormat::bearer(),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        let format = match config.header.mode {
            HeaderMode::Bearer => CredentialFormat::Scheme(config.header.scheme.clone()),
            HeaderMode::Raw => CredentialFormat::Raw,
        };
        let expiry = config.jwt.access_token_expiry;
        let default_ttl = Duration::try_seconds(expiry).unwrap_or_else(|| {
            tracing::warn!(
                "JWT_ACCESS_TOKEN_EXPIRY of {}s is out of range; using {} minutes",
                expiry,
                DEFAULT_TOKEN_TTL_MINUTES
            );
            Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES)
        });
        Self {
            default_ttl,
            format,
        }
    }
}
