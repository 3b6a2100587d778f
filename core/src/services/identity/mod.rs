//! Seam for external identity providers (OAuth2 login).
//!
//! A provider turns an authorization code into a display name; the caller
//! then issues a credential for that name through the token service.

use async_trait::async_trait;

use crate::errors::IdentityError;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL the user agent is redirected to in order to start the login
    fn authorization_url(&self) -> String;

    /// Exchanges an authorization code for the user's display name
    async fn resolve_display_name(&self, code: &str) -> Result<String, IdentityError>;
}
