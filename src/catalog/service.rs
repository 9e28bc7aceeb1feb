//! Catalog operations over a storage gateway

use std::sync::Arc;

use crate::observability::{log_event_with_fields, Event};
use crate::storage::{NewQuestion, Question, TriviaStore};

use super::errors::{CatalogError, CatalogResult};
use super::listing::{CategoryMap, CurrentCategory, QuestionListing, QuestionPage};
use super::pagination::{paginate, DEFAULT_QUESTIONS_PER_PAGE};
use super::validation::{QuestionPayload, ValidationPolicy};

/// Quiz category id meaning "any category"
pub const ALL_CATEGORIES: i64 = 0;

/// Request-scoped view logic over a [`TriviaStore`]
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn TriviaStore>,
    per_page: usize,
    policy: ValidationPolicy,
}

impl Catalog {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            store,
            per_page: DEFAULT_QUESTIONS_PER_PAGE,
            policy: ValidationPolicy::permissive(),
        }
    }

    pub fn with_page_size(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Full id -> label mapping. No categories at all is NotFound.
    pub fn categories(&self) -> CatalogResult<CategoryMap> {
        let categories: CategoryMap = self.store.list_categories()?.into_iter().collect();
        if categories.is_empty() {
            return Err(CatalogError::not_found("no categories"));
        }
        Ok(categories)
    }

    /// One page of all questions, plus the unfiltered total and every category
    pub fn list(&self, page: i64) -> CatalogResult<QuestionPage> {
        let questions = self.store.list_questions()?;
        let window = paginate(&questions, page, self.per_page);
        if window.is_empty() {
            return Err(CatalogError::not_found(format!("page {} is empty", page)));
        }

        Ok(QuestionPage {
            questions: window.to_vec(),
            total_questions: questions.len(),
            categories: self.store.list_categories()?.into_iter().collect(),
            current_category: CurrentCategory::Unselected,
        })
    }

    /// Case-insensitive substring match on question text only
    pub fn search(&self, term: &str) -> CatalogResult<QuestionListing> {
        let needle = term.to_lowercase();
        let matches: Vec<Question> = self
            .store
            .list_questions()?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            return Err(CatalogError::not_found(format!("no questions match {:?}", term)));
        }

        Ok(QuestionListing::new(matches, CurrentCategory::NoContext))
    }

    /// Questions in one category, labelled with the category's type.
    ///
    /// Unknown category and empty category are both NotFound.
    pub fn by_category(&self, category_id: i64) -> CatalogResult<QuestionListing> {
        let questions = self.store.questions_in_category(category_id)?;
        if questions.is_empty() {
            return Err(CatalogError::not_found(format!(
                "no questions in category {}",
                category_id
            )));
        }

        let category = self
            .store
            .get_category(category_id)?
            .ok_or_else(|| CatalogError::not_found(format!("unknown category {}", category_id)))?;

        Ok(QuestionListing::new(
            questions,
            CurrentCategory::Label(category.kind),
        ))
    }

    /// Validate and persist a new question
    pub fn create(&self, payload: &QuestionPayload) -> CatalogResult<Question> {
        let fields = payload.require_fields()?;
        let new = NewQuestion::from_columns(
            fields.question,
            fields.answer,
            fields.difficulty,
            fields.category,
        )?;
        self.policy.check(&new, self.store.as_ref())?;

        let created = self.store.insert_question(new)?;

        let id = created.id.to_string();
        let category = created.category.to_string();
        log_event_with_fields(Event::QuestionCreated, &[("id", &id), ("category", &category)]);

        Ok(created)
    }

    /// Permanently remove a question. An unknown id is Unprocessable.
    pub fn delete(&self, question_id: i64) -> CatalogResult<()> {
        if self.store.get_question(question_id)?.is_none() {
            return Err(CatalogError::unprocessable(format!(
                "question {} does not exist",
                question_id
            )));
        }

        if !self.store.delete_question(question_id)? {
            // Removed concurrently between lookup and delete
            return Err(CatalogError::unprocessable(format!(
                "question {} does not exist",
                question_id
            )));
        }

        log_event_with_fields(Event::QuestionDeleted, &[("id", &question_id.to_string())]);
        Ok(())
    }

    /// Quiz candidate set: every question for [`ALL_CATEGORIES`], else one category
    pub fn quiz_candidates(&self, category_id: i64) -> CatalogResult<Vec<Question>> {
        let questions = if category_id == ALL_CATEGORIES {
            self.store.list_questions()?
        } else {
            self.store.questions_in_category(category_id)?
        };
        Ok(questions)
    }
}
