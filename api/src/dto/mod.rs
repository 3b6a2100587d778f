//! Request and response bodies

pub mod auth;
pub mod error;
pub mod pagination;

pub use auth::{GoogleCallbackQuery, LoginRequest, MeResponse, TokenResponse};
pub use error::ErrorResponse;
pub use pagination::PageQuery;
