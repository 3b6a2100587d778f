//! Word-list locations for food name generation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths of the word lists, one entry per line
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Food nouns
    pub foods_path: PathBuf,

    /// Adjectives prefixed to each food
    pub adjectives_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            foods_path: PathBuf::from("food.txt"),
            adjectives_path: PathBuf::from("adjectives.txt"),
        }
    }
}

impl CatalogConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            foods_path: std::env::var("FOODS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.foods_path),
            adjectives_path: std::env::var("ADJECTIVES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.adjectives_path),
        }
    }
}
