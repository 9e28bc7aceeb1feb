//! Listing result types
//!
//! These serialize with the camelCase keys clients expect
//! (`totalQuestions`, `currentCategory`).

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::storage::{Category, Question};

/// Category context attached to a listing
///
/// The three states are distinct on the wire and clients rely on that:
/// - `Unselected` serializes as `""` (paged listing, nothing chosen)
/// - `NoContext` serializes as `null` (search results)
/// - `Label` serializes as the category's type string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentCategory {
    Unselected,
    NoContext,
    Label(String),
}

impl Serialize for CurrentCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CurrentCategory::Unselected => serializer.serialize_str(""),
            CurrentCategory::NoContext => serializer.serialize_none(),
            CurrentCategory::Label(label) => serializer.serialize_str(label),
        }
    }
}

/// Category id -> type label
///
/// Integer keys serialize as JSON object keys, i.e. `{"1": "Science"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<i64, String>);

impl CategoryMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }
}

impl FromIterator<Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        CategoryMap(iter.into_iter().map(|c| (c.id, c.kind)).collect())
    }
}

/// One page of the full question list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Count over the whole unfiltered set, not the page
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: CurrentCategory,
}

/// Search or category-filter results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: CurrentCategory,
}

impl QuestionListing {
    pub fn new(questions: Vec<Question>, current_category: CurrentCategory) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}
