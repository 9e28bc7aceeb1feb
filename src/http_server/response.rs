//! # Response Formatting
//!
//! Success bodies are `{"success": true, ...fields}`.

use axum::Json;
use serde::Serialize;

use crate::catalog::CategoryMap;
use crate::storage::Question;

/// Success envelope around a body whose fields are inlined
#[derive(Debug, Clone, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn json(body: T) -> Json<Self> {
        Json(Self {
            success: true,
            body,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesBody {
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

impl MessageBody {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizBody {
    pub question: Question,
}
