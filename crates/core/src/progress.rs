//! Module progress states and quiz scoring rules.
//!
//! The passing threshold and the point-award formula live here so the award
//! path, the analytics failure definition, and progress grading all share a
//! single constant.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fraction of questions that must be answered correctly for an attempt to
/// count as passing. Shared by point awards, analytics, and progress grading.
pub const PASSING_THRESHOLD: f64 = 0.70;

// ---------------------------------------------------------------------------
// ProgressStatus
// ---------------------------------------------------------------------------

/// Completion state of a (user, module) progress row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    /// String representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::NotStarted => "not_started",
            ProgressStatus::InProgress => "in_progress",
            ProgressStatus::Completed => "completed",
        }
    }

    /// Parse from a string. Returns `None` for unknown values so callers can
    /// reject bad input instead of silently coercing it.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "not_started" => Some(ProgressStatus::NotStarted),
            "in_progress" => Some(ProgressStatus::InProgress),
            "completed" => Some(ProgressStatus::Completed),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Validate raw attempt counts before any scoring math.
pub fn validate_attempt_counts(score: i32, total_questions: i32) -> CoreResult<()> {
    if total_questions <= 0 {
        return Err(CoreError::Validation(
            "total_questions must be positive".into(),
        ));
    }
    if score < 0 || score > total_questions {
        return Err(CoreError::Validation(format!(
            "score must be between 0 and {total_questions}"
        )));
    }
    Ok(())
}

/// Whether an attempt meets the passing threshold.
pub fn is_passing(score: i32, total_questions: i32) -> bool {
    if total_questions <= 0 {
        return false;
    }
    score as f64 / total_questions as f64 >= PASSING_THRESHOLD
}

/// Points credited for a quiz attempt: floor(100 × score/total) for a passing
/// attempt, nothing otherwise.
///
/// # Examples
///
/// ```
/// use cyberguard_core::progress::quiz_points;
///
/// assert_eq!(quiz_points(5, 5), Some(100));
/// assert_eq!(quiz_points(4, 5), Some(80));
/// assert_eq!(quiz_points(3, 5), None);
/// ```
pub fn quiz_points(score: i32, total_questions: i32) -> Option<i32> {
    if !is_passing(score, total_questions) {
        return None;
    }
    Some((100 * score) / total_questions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ProgressStatus --

    #[test]
    fn status_as_str_returns_correct_strings() {
        assert_eq!(ProgressStatus::NotStarted.as_str(), "not_started");
        assert_eq!(ProgressStatus::InProgress.as_str(), "in_progress");
        assert_eq!(ProgressStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn status_from_str_parses_known_values() {
        assert_eq!(
            ProgressStatus::from_str("not_started"),
            Some(ProgressStatus::NotStarted)
        );
        assert_eq!(
            ProgressStatus::from_str("in_progress"),
            Some(ProgressStatus::InProgress)
        );
        assert_eq!(
            ProgressStatus::from_str("completed"),
            Some(ProgressStatus::Completed)
        );
    }

    #[test]
    fn status_from_str_rejects_unknown_values() {
        assert_eq!(ProgressStatus::from_str("done"), None);
        assert_eq!(ProgressStatus::from_str(""), None);
    }

    // -- validate_attempt_counts --

    #[test]
    fn validate_accepts_in_range_counts() {
        assert!(validate_attempt_counts(0, 5).is_ok());
        assert!(validate_attempt_counts(5, 5).is_ok());
        assert!(validate_attempt_counts(3, 5).is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_total() {
        assert!(validate_attempt_counts(0, 0).is_err());
        assert!(validate_attempt_counts(1, -1).is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_score() {
        assert!(validate_attempt_counts(-1, 5).is_err());
        assert!(validate_attempt_counts(6, 5).is_err());
    }

    // -- is_passing --

    #[test]
    fn passing_at_exact_threshold() {
        // 7/10 == 0.70 exactly.
        assert!(is_passing(7, 10));
    }

    #[test]
    fn failing_just_below_threshold() {
        assert!(!is_passing(6, 10));
        assert!(!is_passing(3, 5));
    }

    #[test]
    fn zero_total_never_passes() {
        assert!(!is_passing(0, 0));
    }

    // -- quiz_points --

    #[test]
    fn points_floor_the_percentage() {
        // 5/7 fails; 6/7 ≈ 0.857 → floor(85.7) = 85.
        assert_eq!(quiz_points(6, 7), Some(85));
        assert_eq!(quiz_points(7, 7), Some(100));
    }

    #[test]
    fn points_at_exact_threshold() {
        assert_eq!(quiz_points(7, 10), Some(70));
    }

    #[test]
    fn no_points_below_threshold() {
        assert_eq!(quiz_points(6, 10), None);
        assert_eq!(quiz_points(0, 5), None);
    }
}
