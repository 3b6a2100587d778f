//! Google OAuth2 authorization-code login.
//!
//! The callback receives an authorization code, which is exchanged for an
//! access token at the token endpoint; the access token is then used to read
//! the user's profile. Only the display name is kept.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use fa_core::errors::IdentityError;
use fa_core::services::identity::IdentityProvider;
use fa_shared::config::GoogleOAuthConfig;

use crate::InfrastructureError;

const SCOPES: &str = "openid email profile";

/// Google OAuth2 endpoint locations
#[derive(Debug, Clone)]
pub struct GoogleEndpoints {
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Default for GoogleEndpoints {
    fn default() -> Self {
        Self {
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    grant_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    name: Option<String>,
    email: Option<String>,
}

impl UserInfo {
    /// Display name, falling back to the email address
    fn display_name(self) -> Option<String> {
        self.name
            .filter(|name| !name.trim().is_empty())
            .or(self.email)
            .filter(|name| !name.trim().is_empty())
    }
}

/// Google implementation of [`IdentityProvider`]
#[derive(Debug, Clone)]
pub struct GoogleOAuthClient {
    config: GoogleOAuthConfig,
    endpoints: GoogleEndpoints,
    auth_url: Url,
    http: Client,
}

impl GoogleOAuthClient {
    pub fn new(config: GoogleOAuthConfig) -> Result<Self, InfrastructureError> {
        Self::with_endpoints(config, GoogleEndpoints::default())
    }

    pub fn with_endpoints(
        config: GoogleOAuthConfig,
        endpoints: GoogleEndpoints,
    ) -> Result<Self, InfrastructureError> {
        let auth_url = Url::parse(&endpoints.auth_url).map_err(|e| {
            InfrastructureError::Config(format!("Invalid Google auth URL: {}", e))
        })?;

        Ok(Self {
            config,
            endpoints,
            auth_url,
            http: Client::new(),
        })
    }

    async fn exchange_code(&self, code: &str) -> Result<String, IdentityError> {
        let response = self
            .http
            .post(&self.endpoints.token_url)
            .form(&TokenRequest {
                code,
                client_id: &self.config.client_id,
                client_secret: &self.config.client_secret,
                redirect_uri: &self.config.redirect_uri,
                grant_type: "authorization_code",
            })
            .send()
            .await
            .map_err(|e| IdentityError::CodeExchange {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Google token exchange failed: {} - {}", status, body);
            return Err(IdentityError::CodeExchange {
                message: format!("token endpoint returned {}", status),
            });
        }

        let tokens: TokenResponse = response.json().await.map_err(|e| IdentityError::CodeExchange {
            message: format!("invalid token response: {}", e),
        })?;
        Ok(tokens.access_token)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<UserInfo, IdentityError> {
        let response = self
            .http
            .get(&self.endpoints.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityError::Profile {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            tracing::error!("Google profile lookup failed: {}", response.status());
            return Err(IdentityError::Profile {
                message: format!("userinfo endpoint returned {}", response.status()),
            });
        }

        response.json().await.map_err(|e| IdentityError::Profile {
            message: format!("invalid profile response: {}", e),
        })
    }
}

#[async_trait]
impl IdentityProvider for GoogleOAuthClient {
    fn authorization_url(&self) -> String {
        let mut url = self.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", SCOPES);
        url.into()
    }

    async fn resolve_display_name(&self, code: &str) -> Result<String, IdentityError> {
        let access_token = self.exchange_code(code).await?;
        let name = self
            .fetch_profile(&access_token)
            .await?
            .display_name()
            .ok_or_else(|| IdentityError::Profile {
                message: "profile has neither name nor email".to_string(),
            })?;

        tracing::info!("Google login resolved for {}", name);
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GoogleOAuthConfig {
        GoogleOAuthConfig {
            client_id: "client-123".to_string(),
            client_secret: "shh".to_string(),
            redirect_uri: "http://localhost:8000/auth/google/callback".to_string(),
        }
    }

    #[test]
    fn test_authorization_url_carries_client_and_scopes() {
        let client = GoogleOAuthClient::new(config()).unwrap();
        let url = Url::parse(&client.authorization_url()).unwrap();

        assert_eq!(url.host_str(), Some("accounts.google.com"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("client_id".to_string(), "client-123".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:8000/auth/google/callback".to_string()
        )));
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&("scope".to_string(), SCOPES.to_string())));
        assert!(!client.authorization_url().contains("shh"));
    }

    #[test]
    fn test_invalid_endpoint_is_config_error() {
        let endpoints = GoogleEndpoints {
            auth_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            GoogleOAuthClient::with_endpoints(config(), endpoints),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let named = UserInfo {
            name: Some("Alice Liddell".to_string()),
            email: Some("alice@example.com".to_string()),
        };
        let unnamed = UserInfo {
            name: Some("  ".to_string()),
            email: Some("alice@example.com".to_string()),
        };
        let empty = UserInfo {
            name: None,
            email: None,
        };

        assert_eq!(named.display_name().as_deref(), Some("Alice Liddell"));
        assert_eq!(unnamed.display_name().as_deref(), Some("alice@example.com"));
        assert_eq!(empty.display_name(), None);
    }

    #[tokio::test]
    async fn test_unreachable_token_endpoint_is_exchange_error() {
        let endpoints = GoogleEndpoints {
            token_url: "http://127.0.0.1:9/token".to_string(),
            ..Default::default()
        };
        let client = GoogleOAuthClient::with_endpoints(config(), endpoints).unwrap();

        let err = client.resolve_display_name("code").await.unwrap_err();
        assert!(matches!(err, IdentityError::CodeExchange { .. }));
    }
}
