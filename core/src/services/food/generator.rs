use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::food::{FoodName, FoodPage, MAX_FOOD_ID};
use crate::errors::FoodError;

/// Builds `"<adjective> <food>"` names from two word lists.
///
/// Every id seeds its own PRNG, so an id always maps to the same name as
/// long as the word lists are unchanged.
#[derive(Debug, Clone)]
pub struct FoodNameGenerator {
    adjectives: Vec<String>,
    foods: Vec<String>,
}

impl FoodNameGenerator {
    pub fn new(adjectives: Vec<String>, foods: Vec<String>) -> Result<Self, FoodError> {
        if adjectives.is_empty() {
            return Err(FoodError::EmptyWordList {
                list: "adjectives".to_string(),
            });
        }
        if foods.is_empty() {
            return Err(FoodError::EmptyWordList {
                list: "foods".to_string(),
            });
        }
        Ok(Self { adjectives, foods })
    }

    /// Name for a single id in `0..=MAX_FOOD_ID`
    pub fn name_for(&self, id: i64) -> Result<FoodName, FoodError> {
        match u64::try_from(id) {
            Ok(id) if id <= MAX_FOOD_ID => Ok(self.generate(id)),
            _ => Err(FoodError::InvalidId { id }),
        }
    }

    /// Names for ids `skip..min(skip + limit, MAX_FOOD_ID)`
    pub fn page(&self, skip: u64, limit: u64) -> FoodPage {
        let end = skip.saturating_add(limit).min(MAX_FOOD_ID);
        FoodPage {
            foods: (skip..end).map(|id| self.generate(id)).collect(),
            total: MAX_FOOD_ID,
        }
    }

    fn generate(&self, id: u64) -> FoodName {
        let mut rng = StdRng::seed_from_u64(id);
        let adjective = &self.adjectives[rng.gen_range(0..self.adjectives.len())];
        let food = &self.foods[rng.gen_range(0..self.foods.len())];
        FoodName {
            id,
            name: format!("{} {}", adjective, food),
        }
    }
}
