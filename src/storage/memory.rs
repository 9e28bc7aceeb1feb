//! In-memory storage gateway
//!
//! Tables are `BTreeMap`s keyed by id, which gives the id-ascending order
//! the gateway contract requires. The question id counter only moves forward.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::gateway::{Category, NewQuestion, Question, TriviaStore};
use super::seed::SeedData;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_question_id: i64,
}

/// Thread-safe in-memory store
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_question_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Create a store populated from seed data
    pub fn with_seed(seed: SeedData) -> StoreResult<Self> {
        let next_question_id = match seed.questions.iter().map(|q| q.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                StoreError::Seed(format!("question id {} leaves no room for new ids", max))
            })?,
            None => 1,
        };

        let tables = Tables {
            categories: seed.categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: seed.questions.into_iter().map(|q| (q.id, q)).collect(),
            next_question_id,
        };

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// Create a store populated with the bundled dataset
    pub fn with_default_seed() -> StoreResult<Self> {
        Self::with_seed(SeedData::default_dataset()?)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaStore for MemoryStore {
    fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;

        let id = tables.next_question_id;
        tables.next_question_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::rejected("id", "question id space exhausted"))?;

        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        };
        tables.questions.insert(id, question.clone());

        Ok(question)
    }

    fn delete_question(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}
