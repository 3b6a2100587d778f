//! Authentication route handlers
//!
//! - Username login issuing a credential
//! - Google OAuth2 login
//! - The identity behind the presented credential

pub mod google;
pub mod login;
pub mod me;
