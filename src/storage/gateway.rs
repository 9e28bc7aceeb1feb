//! Row types and the gateway trait consumed by the catalog

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{StoreError, StoreResult};

/// A persisted trivia question
///
/// Serializes to the flat wire record `{id, question, answer, difficulty, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

/// A question category, e.g. `{id: 1, type: "Science"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Column values for a question that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl NewQuestion {
    /// Coerce loosely-typed JSON values into column values.
    ///
    /// Mirrors what a typed relational column accepts: text columns take any
    /// scalar, integer columns take integers or integer-looking strings.
    pub fn from_columns(
        question: &Value,
        answer: &Value,
        difficulty: &Value,
        category: &Value,
    ) -> StoreResult<Self> {
        Ok(Self {
            question: text_column("question", question)?,
            answer: text_column("answer", answer)?,
            difficulty: integer_column("difficulty", difficulty)?,
            category: integer_column("category", category)?,
        })
    }
}

fn text_column(column: &'static str, value: &Value) -> StoreResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(StoreError::rejected(
            column,
            format!("expected text, got {}", json_kind(other)),
        )),
    }
}

fn integer_column(column: &'static str, value: &Value) -> StoreResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| StoreError::rejected(column, format!("{} is not an integer", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| StoreError::rejected(column, format!("invalid integer syntax: {:?}", s))),
        other => Err(StoreError::rejected(
            column,
            format!("expected integer, got {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Storage gateway contract
///
/// Implementations must return rows ordered by id ascending so that
/// pagination windows are stable between requests.
pub trait TriviaStore: Send + Sync {
    /// All questions, ordered by id
    fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// All categories, ordered by id
    fn list_categories(&self) -> StoreResult<Vec<Category>>;

    fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Questions whose category reference equals `category`, ordered by id
    fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .list_questions()?
            .into_iter()
            .filter(|q| q.category == category)
            .collect())
    }

    /// Persist a question and return it with its assigned id
    fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Remove a question permanently. Returns `false` if it did not exist.
    fn delete_question(&self, id: i64) -> StoreResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_serializes_type_key() {
        let json = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(json, json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn test_question_serializes_flat_record() {
        let q = Question {
            id: 9,
            question: "What boxer's original name is Cassius Clay?".to_string(),
            answer: "Muhammad Ali".to_string(),
            difficulty: 1,
            category: 4,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["answer"], "Muhammad Ali");
        assert_eq!(json["difficulty"], 1);
        assert_eq!(json["category"], 4);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_integer_columns_accept_numeric_strings() {
        let q = NewQuestion::from_columns(&json!("Q"), &json!("A"), &json!("3"), &json!(2)).unwrap();
        assert_eq!(q.difficulty, 3);
        assert_eq!(q.category, 2);
    }

    #[test]
    fn test_text_columns_accept_scalars() {
        let q = NewQuestion::from_columns(&json!(42), &json!(true), &json!(1), &json!(1)).unwrap();
        assert_eq!(q.question, "42");
        assert_eq!(q.answer, "true");
    }

    #[test]
    fn test_integer_column_rejects_garbage() {
        let err = NewQuestion::from_columns(&json!("Q"), &json!("A"), &json!("hard"), &json!(1))
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected { column: "difficulty", .. }));

        let err = NewQuestion::from_columns(&json!("Q"), &json!("A"), &json!(1), &json!(1.5))
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected { column: "category", .. }));
    }

    #[test]
    fn test_text_column_rejects_structures() {
        let err = NewQuestion::from_columns(&json!(["Q"]), &json!("A"), &json!(1), &json!(1))
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected { column: "question", .. }));
    }
}
