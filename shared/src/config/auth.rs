//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Default credential lifetime in seconds (30 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 1800;

/// Default authorization scheme for scheme-prefixed headers
pub const DEFAULT_SCHEME: &str = "Bearer";

/// Default header carrying the credential
pub const DEFAULT_HEADER_NAME: &str = "Authorization";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Signing secret; when absent a random one is generated at startup
    #[serde(default)]
    pub secret: Option<String>,

    /// Credential lifetime in seconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Set credential lifetime in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }
}

/// How the credential is presented on a protected request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// `<scheme> <credential>`
    Bearer,
    /// The header value is the credential itself
    Raw,
}

impl Default for HeaderMode {
    fn default() -> Self {
        HeaderMode::Bearer
    }
}

impl std::str::FromStr for HeaderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bearer" | "scheme" => Ok(HeaderMode::Bearer),
            "raw" => Ok(HeaderMode::Raw),
            _ => Err(format!("Invalid header mode: {}", s)),
        }
    }
}

/// Credential header configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeaderConfig {
    /// Wire shape of the header value
    #[serde(default)]
    pub mode: HeaderMode,

    /// Header name
    #[serde(default = "default_header_name")]
    pub name: String,

    /// Expected scheme in `Bearer` mode, compared case-insensitively
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            mode: HeaderMode::default(),
            name: default_header_name(),
            scheme: default_scheme(),
        }
    }
}

impl HeaderConfig {
    /// Raw header mode under the given header name
    pub fn raw(name: impl Into<String>) -> Self {
        Self {
            mode: HeaderMode::Raw,
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Google OAuth2 client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleOAuthConfig {
    /// OAuth2 client ID
    pub client_id: String,

    /// OAuth2 client secret
    pub client_secret: String,

    /// Redirect URL registered with Google
    pub redirect_uri: String,
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Credential header configuration
    #[serde(default)]
    pub header: HeaderConfig,

    /// Google login, enabled when all three variables are present
    #[serde(default)]
    pub google: Option<GoogleOAuthConfig>,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = var("JWT_SECRET").filter(|s| !s.is_empty());
        let access_token_expiry = var("JWT_ACCESS_TOKEN_EXPIRY")
            .and_then(|v| v.parse().ok())
            .filter(|seconds: &i64| *seconds > 0)
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY);

        let header = HeaderConfig {
            mode: var("AUTH_HEADER_MODE")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            name: var("AUTH_HEADER_NAME").unwrap_or_else(default_header_name),
            scheme: var("AUTH_SCHEME").unwrap_or_else(default_scheme),
        };

        let google = match (
            var("GOOGLE_CLIENT_ID"),
            var("GOOGLE_CLIENT_SECRET"),
            var("GOOGLE_REDIRECT_URI"),
        ) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => Some(GoogleOAuthConfig {
                client_id,
                client_secret,
                redirect_uri,
            }),
            _ => None,
        };

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry,
            },
            header,
            google,
        }
    }
}

fn default_access_token_expiry() -> i64 {
    DEFAULT_ACCESS_TOKEN_EXPIRY
}

fn default_header_name() -> String {
    String::from(DEFAULT_HEADER_NAME)
}

fn default_scheme() -> String {
    String::from(DEFAULT_SCHEME)
}
