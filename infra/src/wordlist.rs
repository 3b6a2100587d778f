//! Word-list loading for food name generation.
//!
//! Files hold one entry per line. Lines are trimmed and blank lines are
//! skipped.

use std::fs;
use std::path::Path;

use fa_core::services::food::FoodNameGenerator;
use fa_shared::config::CatalogConfig;

use crate::InfrastructureError;

/// Reads a word list from disk
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, InfrastructureError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| InfrastructureError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    tracing::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Loads both configured word lists and builds the generator
pub fn load_food_generator(config: &CatalogConfig) -> Result<FoodNameGenerator, InfrastructureError> {
    let adjectives = load_word_list(&config.adjectives_path)?;
    let foods = load_word_list(&config.foods_path)?;
    Ok(FoodNameGenerator::new(adjectives, foods)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FoodError;
    use std::path::PathBuf;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wordlist-{}.txt", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_word_list_skips_blank_lines() {
        let path = write_temp("Taco\r\n\n  Noodle  \n\nPie\n");
        let words = load_word_list(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, vec!["Taco", "Noodle", "Pie"]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_word_list("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, InfrastructureError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_load_food_generator() {
        let adjectives = write_temp("Spicy\nSweet\n");
        let foods = write_temp("Taco\n");
        let config = CatalogConfig {
            foods_path: foods.clone(),
            adjectives_path: adjectives.clone(),
        };

        let generator = load_food_generator(&config).unwrap();
        let name = generator.name_for(1).unwrap().name;
        assert!(name.ends_with(" Taco"));

        fs::remove_file(adjectives).ok();
        fs::remove_file(foods).ok();
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let adjectives = write_temp("\n\n");
        let foods = write_temp("Taco\n");
        let config = CatalogConfig {
            foods_path: foods.clone(),
            adjectives_path: adjectives.clone(),
        };

        let result = load_food_generator(&config);
        fs::remove_file(adjectives).ok();
        fs::remove_file(foods).ok();

        assert!(matches!(
            result,
            Err(InfrastructureError::Food(FoodError::EmptyWordList { .. }))
        ));
    }
}
