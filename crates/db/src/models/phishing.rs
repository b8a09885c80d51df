//! Phishing attempt model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use cyberguard_core::types::{DbId, Timestamp};

/// An immutable phishing attempt row from the `phishing_attempts` table.
///
/// Threat lists hold the snake_case tag strings from
/// [`cyberguard_core::phishing::ThreatTag`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhishingAttempt {
    pub id: DbId,
    pub user_id: DbId,
    pub email_id: String,
    pub detected_threats: Vec<String>,
    pub missed_threats: Vec<String>,
    pub score: i32,
    pub completed_at: Timestamp,
}

/// DTO for recording a graded phishing attempt.
pub struct CreatePhishingAttempt {
    pub email_id: String,
    pub detected_threats: Vec<String>,
    pub missed_threats: Vec<String>,
    pub score: i32,
}
