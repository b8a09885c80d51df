//! Quiz attempt model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cyberguard_core::types::{DbId, Timestamp};

/// An immutable quiz attempt row from the `quiz_attempts` table.
///
/// `answers` is an opaque JSONB payload recorded as submitted; nothing
/// server-side interprets its contents.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizAttempt {
    pub id: DbId,
    pub user_id: DbId,
    pub module_id: DbId,
    pub score: i32,
    pub total_questions: i32,
    pub answers: serde_json::Value,
    pub completed_at: Timestamp,
}

/// DTO for recording a quiz attempt.
#[derive(Debug, Deserialize)]
pub struct CreateQuizAttempt {
    pub module_id: DbId,
    pub score: i32,
    pub total_questions: i32,
    #[serde(default = "empty_answers")]
    pub answers: serde_json::Value,
}

fn empty_answers() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// A quiz attempt joined with its module's category, for the recommendation
/// selector.
#[derive(Debug, Clone, FromRow)]
pub struct AttemptWithCategory {
    pub category: String,
    pub score: i32,
    pub total_questions: i32,
}
