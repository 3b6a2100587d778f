//! Configuration module with per-concern sub-modules
//!
//! - `auth` - signing secret, credential lifetime, header shape, Google login
//! - `catalog` - word-list locations for food names
//! - `environment` - environment detection
//! - `server` - HTTP bind address and CORS

pub mod auth;
pub mod catalog;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, GoogleOAuthConfig, HeaderConfig, HeaderMode, JwtConfig};
pub use catalog::CatalogConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
