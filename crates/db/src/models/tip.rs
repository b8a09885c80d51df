//! Security tip model.

use serde::Serialize;
use sqlx::FromRow;

use cyberguard_core::types::DbId;

/// A row from the `security_tips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SecurityTip {
    pub id: DbId,
    pub tip: String,
}
