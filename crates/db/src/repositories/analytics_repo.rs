//! Cross-table aggregate queries for the admin analytics reports.

use serde::Serialize;
use sqlx::PgPool;

use cyberguard_core::analytics::CategoryCounts;
use cyberguard_core::progress::PASSING_THRESHOLD;
use cyberguard_core::types::DbId;

/// Per-module count of failing attempts, ranked for the failed-quizzes
/// report.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FailedModuleCount {
    pub module_id: DbId,
    pub module_title: String,
    pub failure_count: i64,
}

/// User totals backing the completion-rate report.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCompletionCounts {
    pub total_users: i64,
    pub completed_users: i64,
}

/// Provides read-only aggregations over attempt history.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Per-category attempt totals and sub-threshold failure counts.
    ///
    /// Only categories with at least one attempt appear (inner join plus
    /// grouping), so every row has `total_attempts >= 1`.
    pub async fn category_counts(pool: &PgPool) -> Result<Vec<CategoryCounts>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(
            "SELECT \
                m.category, \
                COUNT(*) FILTER (WHERE qa.score < qa.total_questions * $1)::BIGINT \
                    AS failed_attempts, \
                COUNT(*)::BIGINT AS total_attempts \
             FROM quiz_attempts qa \
             JOIN modules m ON m.id = qa.module_id \
             GROUP BY m.category",
        )
        .bind(PASSING_THRESHOLD)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CategoryCounts {
                category: r.category,
                failed_attempts: r.failed_attempts,
                total_attempts: r.total_attempts,
            })
            .collect())
    }

    /// Total users and users who have completed at least one module.
    pub async fn user_completion_counts(
        pool: &PgPool,
    ) -> Result<UserCompletionCounts, sqlx::Error> {
        sqlx::query_as::<_, UserCompletionCounts>(
            "SELECT \
                COUNT(*)::BIGINT AS total_users, \
                COUNT(*) FILTER (WHERE completed_modules > 0)::BIGINT AS completed_users \
             FROM users",
        )
        .fetch_one(pool)
        .await
    }

    /// Top modules by failing-attempt count. Modules with attempts but no
    /// failures still appear, with a zero count.
    pub async fn most_failed_modules(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<FailedModuleCount>, sqlx::Error> {
        sqlx::query_as::<_, FailedModuleCount>(
            "SELECT \
                m.id AS module_id, \
                m.title AS module_title, \
                COUNT(*) FILTER (WHERE qa.score < qa.total_questions * $1)::BIGINT \
                    AS failure_count \
             FROM quiz_attempts qa \
             JOIN modules m ON m.id = qa.module_id \
             GROUP BY m.id, m.title \
             ORDER BY failure_count DESC, m.id \
             LIMIT $2",
        )
        .bind(PASSING_THRESHOLD)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

/// Internal helper row for the category aggregation query.
#[derive(sqlx::FromRow)]
struct CategoryCountRow {
    category: String,
    failed_attempts: i64,
    total_attempts: i64,
}
