//! Repository for the `user_progress` table.

use sqlx::PgPool;

use cyberguard_core::progress::ProgressStatus;
use cyberguard_core::types::DbId;

use crate::models::progress::{UpsertProgress, UserProgress};

const COLUMNS: &str = "id, user_id, module_id, status, score, attempt_count, \
                        completed_at, created_at, updated_at";

/// Provides persistence for per-module learner progress.
pub struct ProgressRepo;

impl ProgressRepo {
    /// List every progress row for a user, most recently updated first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_progress WHERE user_id = $1 ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// IDs of the modules a user has completed.
    pub async fn completed_module_ids(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT module_id FROM user_progress WHERE user_id = $1 AND status = $2",
        )
        .bind(user_id)
        .bind(ProgressStatus::Completed.as_str())
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Record progress for a (user, module) pair, creating the row on first
    /// contact.
    ///
    /// This runs in a transaction:
    /// 1. Lock the existing row (if any) and note its status.
    /// 2. Upsert the row: the new status wins, `attempt_count` grows by one,
    ///    a non-null incoming score replaces the stored one, and
    ///    `completed_at` is stamped the first time the status reaches
    ///    `completed`.
    /// 3. If this call moved the row into `completed`, bump the user's
    ///    `completed_modules` counter.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &UpsertProgress,
    ) -> Result<UserProgress, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the row so concurrent upserts for the same pair serialize.
        let previous: Option<(String,)> = sqlx::query_as(
            "SELECT status FROM user_progress \
             WHERE user_id = $1 AND module_id = $2 FOR UPDATE",
        )
        .bind(user_id)
        .bind(input.module_id)
        .fetch_optional(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO user_progress (user_id, module_id, status, score, attempt_count, completed_at) \
             VALUES ($1, $2, $3, $4, 1, CASE WHEN $3 = $5 THEN NOW() END) \
             ON CONFLICT ON CONSTRAINT uq_user_progress_user_module DO UPDATE SET \
                status = EXCLUDED.status, \
                score = COALESCE(EXCLUDED.score, user_progress.score), \
                attempt_count = user_progress.attempt_count + 1, \
                completed_at = CASE \
                    WHEN EXCLUDED.status = $5 AND user_progress.completed_at IS NULL THEN NOW() \
                    ELSE user_progress.completed_at \
                END, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .bind(input.module_id)
            .bind(&input.status)
            .bind(input.score)
            .bind(ProgressStatus::Completed.as_str())
            .fetch_one(&mut *tx)
            .await?;

        let completed = ProgressStatus::Completed.as_str();
        let was_completed = previous.map(|(s,)| s == completed).unwrap_or(false);
        if row.status == completed && !was_completed {
            sqlx::query(
                "UPDATE users SET completed_modules = completed_modules + 1, updated_at = NOW() \
                 WHERE id = $1",
            )
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(row)
    }
}
