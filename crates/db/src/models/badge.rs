//! Badge and user badge models.

use serde::Serialize;
use sqlx::FromRow;

use cyberguard_core::types::{DbId, Timestamp};

/// A badge catalog row from the `badges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Badge {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub requirement: String,
    pub points: i32,
}

/// An earned badge joined with its catalog entry, for the user-badges
/// listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EarnedBadge {
    pub badge_id: DbId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub points: i32,
    pub earned_at: Timestamp,
}
