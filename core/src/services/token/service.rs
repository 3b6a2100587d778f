//! Main token service implementation

use std::sync::Arc;

use chrono::Duration;
use fa_shared::config::AuthConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;

use crate::domain::entities::claims::Claims;
use crate::errors::{DomainError, HeaderFault, TokenError};

use super::clock::{Clock, SystemClock};
use super::config::{CredentialFormat, TokenServiceConfig};
use super::secret::SigningSecret;

/// Signing algorithm used for every credential
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claim set as found in a presented credential, before presence checks
#[derive(Debug, Deserialize)]
struct PresentedClaims {
    username: Option<String>,
    expire: Option<i64>,
}

/// Issues and verifies stateless, time-limited credentials.
///
/// Holds only immutable key material and is safe to share across workers.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a token service backed by the wall clock
    pub fn new(secret: &SigningSecret, config: TokenServiceConfig) -> Self {
        Self::with_clock(secret, config, Arc::new(SystemClock))
    }

    /// Creates a token service reading time from `clock`
    pub fn with_clock(
        secret: &SigningSecret,
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // Expiry lives in the custom `expire` claim and is checked by hand,
        // so none of the registered claims are required or validated.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Resolves the process secret from configuration and builds the service
    pub fn from_auth_config(config: &AuthConfig) -> Self {
        let secret = SigningSecret::resolve(config.jwt.secret.as_deref());
        Self::new(&secret, TokenServiceConfig::from(config))
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a credential for `username` with the configured default lifetime
    pub fn issue(&self, username: &str) -> Result<String, DomainError> {
        self.issue_with_ttl(username, self.config.default_ttl)
    }

    /// Issues a credential for `username` expiring `ttl` from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed credential
    /// * `Err(DomainError::Validation)` - The username is empty
    pub fn issue_with_ttl(&self, username: &str, ttl: Duration) -> Result<String, DomainError> {
        if username.is_empty() {
            return Err(DomainError::Validation {
                message: "username must not be empty".to_string(),
            });
        }

        let expire = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or_else(|| DomainError::Internal {
                message: format!("Token lifetime of {}s is out of range", ttl.num_seconds()),
            })?;
        let claims = Claims::new(username, expire);
        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign token: {}", e),
            }
        })?;

        tracing::debug!(username, expire = claims.expire, "issued token");
        Ok(token)
    }

    /// Verifies a presented header value and returns the username it carries
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The verified username
    /// * `Err(TokenError)` - The first check that failed
    pub fn verify(&self, header: Option<&str>) -> Result<String, TokenError> {
        let token = self.extract_credential(header)?;
        let claims = self.decode_claims(token)?;

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims.username)
    }

    /// Pulls the credential out of a header value according to the
    /// configured wire shape
    pub fn extract_credential<'a>(&self, header: Option<&'a str>) -> Result<&'a str, TokenError> {
        let value = match header {
            Some(value) if !value.is_empty() => value,
            _ => return Err(TokenError::MissingCredential),
        };

        match &self.config.format {
            CredentialFormat::Raw => Ok(value),
            CredentialFormat::Scheme(expected) => {
                let mut parts = value.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(scheme), Some(token), None) => {
                        if scheme.eq_ignore_ascii_case(expected) {
                            Ok(token)
                        } else {
                            Err(TokenError::MalformedHeader(HeaderFault::InvalidScheme))
                        }
                    }
                    _ => Err(TokenError::MalformedHeader(HeaderFault::InvalidFormat)),
                }
            }
        }
    }

    /// Checks the signature and required claims of a bare credential.
    /// Expiry is not checked here.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<PresentedClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("rejected token: {}", e);
                TokenError::InvalidToken
            })?;

        match (data.claims.username, data.claims.expire) {
            (Some(username), Some(expire)) => Ok(Claims { username, expire }),
            _ => Err(TokenError::InvalidToken),
        }
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .finish()
    }
}
