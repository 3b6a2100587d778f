//! Token service module for credential management
//!
//! This module handles:
//! - Signing secret resolution (configured or generated per process)
//! - HS256 credential issuance binding a username to an expiry
//! - Header parsing and credential verification
//! - An injectable clock so verification can be evaluated at any instant

mod clock;
mod config;
mod secret;
mod service;


pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CredentialFormat, TokenServiceConfig};
pub use secret::SigningSecret;
pub use service::TokenService;
