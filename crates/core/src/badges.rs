//! Badge qualification rules.
//!
//! Badges are awarded by evaluating a fixed predicate per badge name against
//! a snapshot of the user's activity counters. Predicates are keyed by the
//! badge's unique name; the award pass itself (insert + point credit) lives
//! in the storage layer.

// ---------------------------------------------------------------------------
// Badge names
// ---------------------------------------------------------------------------

// These must match the seed data in the badges migration.

pub const BADGE_FIRST_STEPS: &str = "First Steps";
pub const BADGE_PASSWORD_PRO: &str = "Password Pro";
pub const BADGE_PHISHING_MASTER: &str = "Phishing Master";
pub const BADGE_QUIZ_CHAMPION: &str = "Quiz Champion";
pub const BADGE_PERFECT_SCORE: &str = "Perfect Score";
pub const BADGE_DEDICATED_LEARNER: &str = "Dedicated Learner";

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum phishing score for an attempt to count toward "Phishing Master".
pub const PHISHING_MASTERY_SCORE: i32 = 90;

/// Number of high-scoring phishing attempts required for "Phishing Master".
pub const PHISHING_MASTERY_COUNT: i64 = 3;

// ---------------------------------------------------------------------------
// UserActivity
// ---------------------------------------------------------------------------

/// Snapshot of the counters the badge predicates read.
///
/// Built by the storage layer from the user row plus two aggregate queries.
/// One snapshot backs a whole evaluation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserActivity {
    /// Lifetime quiz attempt count (`users.quizzes_taken`).
    pub quizzes_taken: i32,
    /// Lifetime completed module count (`users.completed_modules`).
    pub completed_modules: i32,
    /// Phishing attempts scoring at least [`PHISHING_MASTERY_SCORE`].
    pub high_scoring_phishing_attempts: i64,
    /// Whether any quiz attempt answered every question correctly.
    pub has_perfect_attempt: bool,
}

// ---------------------------------------------------------------------------
// Qualification
// ---------------------------------------------------------------------------

/// Whether the activity snapshot satisfies the named badge's requirement.
///
/// Unknown badge names never qualify, so adding a catalog row without a rule
/// here is inert rather than an error.
pub fn qualifies(badge_name: &str, activity: &UserActivity) -> bool {
    match badge_name {
        BADGE_FIRST_STEPS => activity.quizzes_taken >= 1,
        BADGE_PASSWORD_PRO => activity.completed_modules >= 1,
        BADGE_PHISHING_MASTER => {
            activity.high_scoring_phishing_attempts >= PHISHING_MASTERY_COUNT
        }
        BADGE_QUIZ_CHAMPION => activity.quizzes_taken >= 10,
        BADGE_PERFECT_SCORE => activity.has_perfect_attempt,
        BADGE_DEDICATED_LEARNER => activity.completed_modules >= 5,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn activity() -> UserActivity {
        UserActivity::default()
    }

    #[test]
    fn first_steps_requires_one_quiz() {
        let mut a = activity();
        assert!(!qualifies(BADGE_FIRST_STEPS, &a));
        a.quizzes_taken = 1;
        assert!(qualifies(BADGE_FIRST_STEPS, &a));
    }

    #[test]
    fn password_pro_requires_one_completed_module() {
        let mut a = activity();
        assert!(!qualifies(BADGE_PASSWORD_PRO, &a));
        a.completed_modules = 1;
        assert!(qualifies(BADGE_PASSWORD_PRO, &a));
    }

    #[test]
    fn phishing_master_requires_three_high_scores() {
        let mut a = activity();
        a.high_scoring_phishing_attempts = 2;
        assert!(!qualifies(BADGE_PHISHING_MASTER, &a));
        a.high_scoring_phishing_attempts = 3;
        assert!(qualifies(BADGE_PHISHING_MASTER, &a));
    }

    #[test]
    fn quiz_champion_requires_ten_quizzes() {
        let mut a = activity();
        a.quizzes_taken = 9;
        assert!(!qualifies(BADGE_QUIZ_CHAMPION, &a));
        a.quizzes_taken = 10;
        assert!(qualifies(BADGE_QUIZ_CHAMPION, &a));
    }

    #[test]
    fn perfect_score_requires_a_perfect_attempt() {
        let mut a = activity();
        assert!(!qualifies(BADGE_PERFECT_SCORE, &a));
        a.has_perfect_attempt = true;
        assert!(qualifies(BADGE_PERFECT_SCORE, &a));
    }

    #[test]
    fn dedicated_learner_requires_five_completed_modules() {
        let mut a = activity();
        a.completed_modules = 4;
        assert!(!qualifies(BADGE_DEDICATED_LEARNER, &a));
        a.completed_modules = 5;
        assert!(qualifies(BADGE_DEDICATED_LEARNER, &a));
    }

    #[test]
    fn unknown_badge_never_qualifies() {
        let a = UserActivity {
            quizzes_taken: 100,
            completed_modules: 100,
            high_scoring_phishing_attempts: 100,
            has_perfect_attempt: true,
        };
        assert!(!qualifies("Night Owl", &a));
    }

    #[test]
    fn several_badges_can_qualify_at_once() {
        let a = UserActivity {
            quizzes_taken: 10,
            completed_modules: 5,
            high_scoring_phishing_attempts: 3,
            has_perfect_attempt: true,
        };
        for name in [
            BADGE_FIRST_STEPS,
            BADGE_PASSWORD_PRO,
            BADGE_PHISHING_MASTER,
            BADGE_QUIZ_CHAMPION,
            BADGE_PERFECT_SCORE,
            BADGE_DEDICATED_LEARNER,
        ] {
            assert!(qualifies(name, &a), "{name} should qualify");
        }
    }
}
