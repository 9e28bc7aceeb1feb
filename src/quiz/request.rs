//! Quiz request body

use serde::{Deserialize, Deserializer};

#[cfg(test)]
use crate::catalog::service::ALL_CATEGORIES;

/// `quiz_category` as sent by clients, e.g. `{"id": 0, "type": "All"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "integer_or_numeric_string")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Category keys reach clients as object keys, so ids may come back as strings
fn integer_or_numeric_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid category id {:?}", text))),
    }
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown in this session; absent means none
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}
