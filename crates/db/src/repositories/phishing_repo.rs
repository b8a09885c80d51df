//! Repository for the `phishing_attempts` table.

use sqlx::PgPool;

use cyberguard_core::types::DbId;

use crate::models::phishing::{CreatePhishingAttempt, PhishingAttempt};

const COLUMNS: &str =
    "id, user_id, email_id, detected_threats, missed_threats, score, completed_at";

/// Provides persistence for phishing simulation attempts.
pub struct PhishingRepo;

impl PhishingRepo {
    /// Record a graded phishing attempt.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePhishingAttempt,
    ) -> Result<PhishingAttempt, sqlx::Error> {
        let query = format!(
            "INSERT INTO phishing_attempts \
                (user_id, email_id, detected_threats, missed_threats, score) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhishingAttempt>(&query)
            .bind(user_id)
            .bind(&input.email_id)
            .bind(&input.detected_threats)
            .bind(&input.missed_threats)
            .bind(input.score)
            .fetch_one(pool)
            .await
    }

    /// List a user's phishing attempts, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PhishingAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM phishing_attempts \
             WHERE user_id = $1 \
             ORDER BY completed_at DESC, id DESC"
        );
        sqlx::query_as::<_, PhishingAttempt>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count a user's attempts at or above the given score.
    pub async fn count_high_scoring(
        pool: &PgPool,
        user_id: DbId,
        min_score: i32,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM phishing_attempts WHERE user_id = $1 AND score >= $2",
        )
        .bind(user_id)
        .bind(min_score)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }
}
