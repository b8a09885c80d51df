//! Training module model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cyberguard_core::types::{DbId, Timestamp};

/// A training module row from the `modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub content: String,
    pub estimated_minutes: i32,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a module.
#[derive(Debug, Deserialize)]
pub struct CreateModule {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub content: String,
    pub estimated_minutes: i32,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
