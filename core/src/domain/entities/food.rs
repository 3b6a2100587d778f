//! Generated food names.

use serde::{Deserialize, Serialize};

/// Highest addressable food id; also the advertised catalogue size
pub const MAX_FOOD_ID: u64 = 2_300_000;

/// A food name bound to its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodName {
    pub id: u64,
    pub name: String,
}

/// One page of food names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPage {
    pub foods: Vec<FoodName>,
    pub total: u64,
}
