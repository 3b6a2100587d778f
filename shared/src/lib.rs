//! Shared configuration and wire types for the Food Names API
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - The error body returned by every failing endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CatalogConfig, CorsConfig, Environment, GoogleOAuthConfig,
    HeaderConfig, HeaderMode, JwtConfig, ServerConfig,
};
pub use errors::ErrorResponse;
