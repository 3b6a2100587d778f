//! Route handlers
//!
//! - `root` - greeting and health check
//! - `foods` - generated food names
//! - `items` - in-memory item catalog
//! - `auth` - login, Google login and the current identity

pub mod auth;
pub mod foods;
pub mod items;
pub mod root;
