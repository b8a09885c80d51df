//! Quiz question model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cyberguard_core::types::DbId;

/// A quiz question row from the `quiz_questions` table.
///
/// `options` is a JSONB array of option strings; `correct_answer` indexes
/// into it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizQuestion {
    pub id: DbId,
    pub module_id: DbId,
    pub question: String,
    pub options: serde_json::Value,
    pub correct_answer: i32,
    pub explanation: Option<String>,
    pub order_index: i32,
}

/// DTO for creating a quiz question.
#[derive(Debug, Deserialize)]
pub struct CreateQuizQuestion {
    pub module_id: DbId,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}
