//! Seed data for the in-memory store
//!
//! A seed file is a JSON object with `categories` and `questions` arrays,
//! using the same row shapes the API serves.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::gateway::{Category, Question};

const DEFAULT_SEED: &str = include_str!("../../data/trivia_seed.json");

/// Initial table contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl SeedData {
    /// The bundled dataset: six categories and nineteen questions
    pub fn default_dataset() -> StoreResult<Self> {
        Self::parse(DEFAULT_SEED)
    }

    /// Load a seed file from disk
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::Seed(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> StoreResult<Self> {
        let seed: SeedData = serde_json::from_str(content)
            .map_err(|e| StoreError::Seed(format!("invalid seed JSON: {}", e)))?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reject duplicate ids within either table
    pub fn validate(&self) -> StoreResult<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id) {
                return Err(StoreError::Seed(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        seen.clear();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(StoreError::Seed(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
        }

        Ok(())
    }
}
