//! Password strength heuristic.
//!
//! Eight boolean checks; strength is the fraction of passed checks as a
//! 0-100 score, banded into six labels. Advisory only: nothing here is
//! persisted or used to gate registration.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length for the length check.
pub const MIN_LENGTH: usize = 12;

/// Substrings that immediately fail the common-password check, matched
/// case-insensitively.
pub const COMMON_PASSWORDS: [&str; 5] = ["password", "12345678", "qwerty", "admin", "letmein"];

const CHECK_COUNT: u32 = 8;

// ---------------------------------------------------------------------------
// StrengthLabel
// ---------------------------------------------------------------------------

/// Strength band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    None,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Band a 0-100 score. Thresholds: 0 / 25 / 50 / 75 / 90.
    pub fn for_score(score: f64) -> Self {
        if score == 0.0 {
            StrengthLabel::None
        } else if score < 25.0 {
            StrengthLabel::VeryWeak
        } else if score < 50.0 {
            StrengthLabel::Weak
        } else if score < 75.0 {
            StrengthLabel::Moderate
        } else if score < 90.0 {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }

    /// String representation for API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "none",
            StrengthLabel::VeryWeak => "very_weak",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Moderate => "moderate",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very_strong",
        }
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Outcome of each individual check. `true` means the check passed.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub no_sequential: bool,
    pub no_repeating: bool,
    pub not_common: bool,
}

impl PasswordChecks {
    fn passed(&self) -> u32 {
        [
            self.min_length,
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_symbol,
            self.no_sequential,
            self.no_repeating,
            self.not_common,
        ]
        .iter()
        .filter(|&&c| c)
        .count() as u32
    }
}

/// Full strength report for one candidate password.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub checks: PasswordChecks,
    pub score: f64,
    pub label: StrengthLabel,
}

/// Evaluate a candidate password. The empty string scores 0 with every
/// check failed.
pub fn evaluate(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            checks: PasswordChecks::default(),
            score: 0.0,
            label: StrengthLabel::None,
        };
    }

    let checks = PasswordChecks {
        min_length: password.chars().count() >= MIN_LENGTH,
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        no_sequential: !has_sequential_run(password),
        no_repeating: !has_repeated_run(password),
        not_common: !contains_common_password(password),
    };

    let score = f64::min(100.0, checks.passed() as f64 / CHECK_COUNT as f64 * 100.0);
    StrengthReport {
        checks,
        score,
        label: StrengthLabel::for_score(score),
    }
}

/// Three consecutive ascending letters (abc…xyz) or digits (012…789),
/// case-insensitive.
fn has_sequential_run(password: &str) -> bool {
    let lower: Vec<char> = password.to_lowercase().chars().collect();
    lower.windows(3).any(|w| {
        let same_class = (w[0].is_ascii_lowercase()
            && w[1].is_ascii_lowercase()
            && w[2].is_ascii_lowercase())
            || (w[0].is_ascii_digit() && w[1].is_ascii_digit() && w[2].is_ascii_digit());
        same_class && w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1
    })
}

/// The same character three or more times in a row, case-sensitive.
fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn contains_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| lower.contains(common))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
