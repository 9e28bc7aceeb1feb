//! Create-payload validation
//!
//! Validation runs as separate steps so each can be tightened on its own:
//!
//! 1. Presence: all four fields must be present and non-null.
//! 2. Column coercion: done by the store (`NewQuestion::from_columns`).
//! 3. Policy: optional range and referential checks, off by default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::{NewQuestion, TriviaStore};

use super::errors::{CatalogError, CatalogResult};

/// Accepted difficulty range when range enforcement is on
pub const DIFFICULTY_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Raw body of `POST /questions`
///
/// Absent and `null` fields both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
}

/// Borrowed view of a payload that passed the presence check
#[derive(Debug, Clone, Copy)]
pub struct PresentFields<'a> {
    pub question: &'a Value,
    pub answer: &'a Value,
    pub difficulty: &'a Value,
    pub category: &'a Value,
}

impl QuestionPayload {
    /// Names of required fields that are absent or null
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("question", &self.question),
            ("answer", &self.answer),
            ("difficulty", &self.difficulty),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// Presence step
    pub fn require_fields(&self) -> CatalogResult<PresentFields<'_>> {
        match (&self.question, &self.answer, &self.difficulty, &self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                Ok(PresentFields {
                    question,
                    answer,
                    difficulty,
                    category,
                })
            }
            _ => Err(CatalogError::unprocessable(format!(
                "missing required fields: {}",
                self.missing_fields().join(", ")
            ))),
        }
    }
}

/// Optional checks applied after column coercion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject difficulties outside 1..=5
    #[serde(default)]
    pub enforce_difficulty_range: bool,

    /// Reject category ids with no matching category row
    #[serde(default)]
    pub require_known_category: bool,
}

impl ValidationPolicy {
    /// Accept everything that survives column coercion
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Turn every optional check on
    pub fn strict() -> Self {
        Self {
            enforce_difficulty_range: true,
            require_known_category: true,
        }
    }

    pub fn check_difficulty(&self, difficulty: i64) -> CatalogResult<()> {
        if self.enforce_difficulty_range && !DIFFICULTY_RANGE.contains(&difficulty) {
            return Err(CatalogError::unprocessable(format!(
                "difficulty {} outside {}..={}",
                difficulty,
                DIFFICULTY_RANGE.start(),
                DIFFICULTY_RANGE.end()
            )));
        }
        Ok(())
    }

    pub fn check_category(&self, category: i64, store: &dyn TriviaStore) -> CatalogResult<()> {
        if self.require_known_category && store.get_category(category)?.is_none() {
            return Err(CatalogError::unprocessable(format!(
                "unknown category {}",
                category
            )));
        }
        Ok(())
    }

    /// Policy step
    pub fn check(&self, question: &NewQuestion, store: &dyn TriviaStore) -> CatalogResult<()> {
        self.check_difficulty(question.difficulty)?;
        self.check_category(question.category, store)
    }
}
