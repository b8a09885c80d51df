//! Repository for the `security_tips` table.

use sqlx::PgPool;

use crate::models::tip::SecurityTip;

/// Provides access to the rotating security-tip catalog.
pub struct TipRepo;

impl TipRepo {
    /// List every tip in catalog order. The daily-tip rotation indexes into
    /// this ordering.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SecurityTip>, sqlx::Error> {
        sqlx::query_as::<_, SecurityTip>("SELECT id, tip FROM security_tips ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
