//! Domain entities.

pub mod claims;
pub mod food;
pub mod item;

pub use claims::{Claims, DEFAULT_TOKEN_TTL_MINUTES};
pub use food::{FoodName, FoodPage, MAX_FOOD_ID};
pub use item::{Item, ItemPage, ItemRecord};
