//! User progress model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cyberguard_core::types::{DbId, Timestamp};

/// A (user, module) progress row from the `user_progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub module_id: DbId,
    pub status: String,
    pub score: Option<i32>,
    pub attempt_count: i32,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a progress row. `status` is validated against
/// [`cyberguard_core::progress::ProgressStatus`] before it reaches the
/// repository.
#[derive(Debug, Deserialize)]
pub struct UpsertProgress {
    pub module_id: DbId,
    pub status: String,
    pub score: Option<i32>,
}
