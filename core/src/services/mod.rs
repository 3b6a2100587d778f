//! Business services containing domain logic and use cases.

pub mod catalog;
pub mod food;
pub mod identity;
pub mod token;

// Re-export commonly used types
pub use catalog::ItemCatalog;
pub use food::FoodNameGenerator;
pub use identity::IdentityProvider;
pub use token::{SigningSecret, TokenService, TokenServiceConfig};
