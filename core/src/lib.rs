//! # Food Names Core
//!
//! Domain layer for the Food Names API: credential issuance and
//! verification, deterministic food-name generation, the in-memory item
//! catalog and the seam for external identity providers.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
