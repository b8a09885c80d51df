//! Repository for the `quiz_attempts` table.

use sqlx::PgPool;

use cyberguard_core::types::DbId;

use crate::models::attempt::{AttemptWithCategory, CreateQuizAttempt, QuizAttempt};

const COLUMNS: &str = "id, user_id, module_id, score, total_questions, answers, completed_at";

/// Provides persistence for quiz attempts.
pub struct AttemptRepo;

impl AttemptRepo {
    /// Record a quiz attempt.
    ///
    /// This runs in a transaction:
    /// 1. Insert the attempt row.
    /// 2. Bump the user's `quizzes_taken` counter.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateQuizAttempt,
    ) -> Result<QuizAttempt, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO quiz_attempts (user_id, module_id, score, total_questions, answers) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let attempt = sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .bind(input.module_id)
            .bind(input.score)
            .bind(input.total_questions)
            .bind(&input.answers)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE users SET quizzes_taken = quizzes_taken + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(attempt)
    }

    /// List a user's attempts, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<QuizAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quiz_attempts \
             WHERE user_id = $1 \
             ORDER BY completed_at DESC, id DESC"
        );
        sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's attempts joined with each module's category, newest
    /// first. The recommendation selector depends on this ordering.
    pub async fn list_with_categories(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AttemptWithCategory>, sqlx::Error> {
        sqlx::query_as::<_, AttemptWithCategory>(
            "SELECT m.category, qa.score, qa.total_questions \
             FROM quiz_attempts qa \
             JOIN modules m ON m.id = qa.module_id \
             WHERE qa.user_id = $1 \
             ORDER BY qa.completed_at DESC, qa.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Whether the user has ever answered every question in an attempt.
    pub async fn has_perfect_attempt(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(\
                SELECT 1 FROM quiz_attempts \
                WHERE user_id = $1 AND score = total_questions\
             )",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(exists.0)
    }
}
