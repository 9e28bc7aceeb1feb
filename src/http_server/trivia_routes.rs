//! Trivia HTTP Routes
//!
//! Categories, paged questions, create/delete, search, per-category
//! listings, and quiz play.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::catalog::{Catalog, CatalogError, QuestionListing, QuestionPage, QuestionPayload};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::quiz::{QuizRequest, QuizSelector};

use super::errors::{ApiError, ApiResult};
use super::extract::{JsonBody, PathId};
use super::response::{CategoriesBody, MessageBody, QuizBody, Success};

// ==================
// Shared State
// ==================

/// State shared across trivia handlers
pub struct TriviaState {
    pub catalog: Catalog,
    pub quiz: QuizSelector,
    pub metrics: Arc<MetricsRegistry>,
}

impl TriviaState {
    pub fn new(catalog: Catalog, quiz: QuizSelector) -> Self {
        Self {
            catalog,
            quiz,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

// ==================
// Routes
// ==================

/// Create trivia routes
pub fn trivia_routes(state: Arc<TriviaState>) -> Router {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route(
            "/categories/:category_id/questions",
            get(questions_by_category_handler),
        )
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/:question_id", delete(delete_question_handler))
        .route("/quizzes", post(quiz_handler))
        .with_state(state)
}

/// `?page=N`; anything missing or non-integer means page 1
fn requested_page(query: &HashMap<String, String>) -> i64 {
    query
        .get("page")
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1)
}

// ==================
// Handlers
// ==================

async fn list_categories_handler(
    State(state): State<Arc<TriviaState>>,
) -> ApiResult<Json<Success<CategoriesBody>>> {
    let categories = state.catalog.categories()?;
    Ok(Success::json(CategoriesBody { categories }))
}

async fn list_questions_handler(
    State(state): State<Arc<TriviaState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<Success<QuestionPage>>> {
    let page = state.catalog.list(requested_page(&query))?;
    Ok(Success::json(page))
}

async fn delete_question_handler(
    State(state): State<Arc<TriviaState>>,
    PathId(question_id): PathId,
) -> ApiResult<Json<Success<MessageBody>>> {
    state.catalog.delete(question_id)?;
    state.metrics.increment_questions_deleted();

    Ok(Success::json(MessageBody::new("Question successfully deleted")))
}

async fn create_question_handler(
    State(state): State<Arc<TriviaState>>,
    JsonBody(payload): JsonBody<QuestionPayload>,
) -> ApiResult<Json<Success<MessageBody>>> {
    state.catalog.create(&payload)?;
    state.metrics.increment_questions_created();

    Ok(Success::json(MessageBody::new("Question successfully created")))
}

async fn search_questions_handler(
    State(state): State<Arc<TriviaState>>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> ApiResult<Json<Success<QuestionListing>>> {
    let listing = state.catalog.search(&request.search_term)?;
    Ok(Success::json(listing))
}

async fn questions_by_category_handler(
    State(state): State<Arc<TriviaState>>,
    PathId(category_id): PathId,
) -> ApiResult<Json<Success<QuestionListing>>> {
    let listing = state.catalog.by_category(category_id)?;
    Ok(Success::json(listing))
}

async fn quiz_handler(
    State(state): State<Arc<TriviaState>>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> ApiResult<Json<Success<QuizBody>>> {
    let candidates = state.catalog.quiz_candidates(request.quiz_category.id)?;

    let question = state
        .quiz
        .next_question(candidates, &request.previous_questions)
        .map_err(|err| {
            if matches!(err, CatalogError::NotFound(_)) {
                state.metrics.increment_quizzes_exhausted();
                log_event_with_fields(
                    Event::QuizExhausted,
                    &[
                        ("category", &request.quiz_category.id.to_string()),
                        ("previous", &request.previous_questions.len().to_string()),
                    ],
                );
            }
            ApiError::from(err)
        })?;

    state.metrics.increment_quiz_questions_served();
    Ok(Success::json(QuizBody { question }))
}
