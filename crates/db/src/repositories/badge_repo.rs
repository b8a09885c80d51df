//! Repository for the `badges` and `user_badges` tables.

use sqlx::PgPool;

use cyberguard_core::types::DbId;

use crate::models::badge::{Badge, EarnedBadge};

const COLUMNS: &str = "id, name, description, icon, category, requirement, points";

/// Provides access to the badge catalog and per-user awards.
pub struct BadgeRepo;

impl BadgeRepo {
    /// List the full badge catalog.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges ORDER BY id");
        sqlx::query_as::<_, Badge>(&query).fetch_all(pool).await
    }

    /// IDs of the badges a user has already earned.
    pub async fn earned_badge_ids(pool: &PgPool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT badge_id FROM user_badges WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// List a user's earned badges with their catalog details, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EarnedBadge>, sqlx::Error> {
        sqlx::query_as::<_, EarnedBadge>(
            "SELECT b.id AS badge_id, b.name, b.description, b.icon, b.category, \
                    b.points, ub.earned_at \
             FROM user_badges ub \
             JOIN badges b ON b.id = ub.badge_id \
             WHERE ub.user_id = $1 \
             ORDER BY ub.earned_at DESC, b.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Award a badge to a user and credit its points.
    ///
    /// This runs in a transaction:
    /// 1. Insert the (user, badge) row; the unique constraint turns a repeat
    ///    award into a no-op.
    /// 2. If the row is new, credit the badge's points to the user's
    ///    cyber hygiene score.
    ///
    /// Returns `true` when the badge was newly awarded.
    pub async fn award(
        pool: &PgPool,
        user_id: DbId,
        badge_id: DbId,
        points: i32,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO user_badges (user_id, badge_id) VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_user_badges_user_badge DO NOTHING",
        )
        .bind(user_id)
        .bind(badge_id)
        .execute(&mut *tx)
        .await?;

        let newly_awarded = result.rows_affected() == 1;
        if newly_awarded {
            sqlx::query(
                "UPDATE users SET cyber_hygiene_score = cyber_hygiene_score + $2, \
                        updated_at = NOW() \
                 WHERE id = $1",
            )
            .bind(user_id)
            .bind(points)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(newly_awarded)
    }
}
