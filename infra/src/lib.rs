//! # Infrastructure Layer
//!
//! Concrete implementations of the things the core treats as external:
//! - **Word lists**: loading adjective and food files for name generation
//! - **OAuth2**: the Google authorization-code exchange and profile lookup

// Re-export core types for convenience
pub use fa_core::errors::*;

/// Word-list files
pub mod wordlist;

/// External identity providers
pub mod oauth;

pub use oauth::GoogleOAuthClient;
pub use wordlist::{load_food_generator, load_word_list};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Word-list file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Word lists were read but unusable
    #[error(transparent)]
    Food(#[from] FoodError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
