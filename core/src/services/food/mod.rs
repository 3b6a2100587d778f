//! Deterministic food-name generation from word lists

mod generator;

pub use generator::FoodNameGenerator;
