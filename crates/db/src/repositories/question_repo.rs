//! Repository for the `quiz_questions` table.

use sqlx::PgPool;

use cyberguard_core::types::DbId;

use crate::models::question::{CreateQuizQuestion, QuizQuestion};

const COLUMNS: &str =
    "id, module_id, question, options, correct_answer, explanation, order_index";

/// Provides CRUD operations for quiz questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuizQuestion,
    ) -> Result<QuizQuestion, sqlx::Error> {
        let options = serde_json::to_value(&input.options)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let query = format!(
            "INSERT INTO quiz_questions (module_id, question, options, correct_answer,
                                         explanation, order_index)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuizQuestion>(&query)
            .bind(input.module_id)
            .bind(&input.question)
            .bind(options)
            .bind(input.correct_answer)
            .bind(&input.explanation)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// List the questions for a module in presentation order.
    pub async fn list_for_module(
        pool: &PgPool,
        module_id: DbId,
    ) -> Result<Vec<QuizQuestion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quiz_questions WHERE module_id = $1 ORDER BY order_index, id"
        );
        sqlx::query_as::<_, QuizQuestion>(&query)
            .bind(module_id)
            .fetch_all(pool)
            .await
    }
}
