// Database row structs

use serde_json::Value;
use sqlx::types::Json;

use crate::models::{string_list, ContextContent, Question, QuestionBody, QuestionType};

/// A `questions` row left-joined with `contexts`. JSON columns are read raw
/// and decoded leniently.
#[derive(sqlx::FromRow)]
pub struct QuestionRow {
    pub question_id: String,
    pub unit: Option<String>,
    pub year: Option<String>,
    pub question_type: Option<String>,
    pub question: Option<Json<Value>>,
    pub options: Option<Json<Value>>,
    pub correct_answer: Option<Json<Value>>,
    pub context_id: Option<String>,
    pub context_type: Option<String>,
    pub context_content: Option<Json<Value>>,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            question_id: row.question_id,
            unit: row.unit,
            year: row.year,
            question_type: row
                .question_type
                .map(QuestionType::from)
                .unwrap_or_default(),
            question: row
                .question
                .map(|Json(v)| QuestionBody::from_json(v))
                .unwrap_or_default(),
            options: row.options.map(|Json(v)| string_list(v)).unwrap_or_default(),
            correct_answer: row
                .correct_answer
                .map(|Json(v)| v)
                .filter(|v| !v.is_null())
                .map(string_list),
            context_id: row.context_id,
            context_type: row.context_type,
            context_content: ContextContent::from_json(row.context_content.map(|Json(v)| v)),
        }
    }
}
