//! Badge evaluation shared by the quiz and phishing submission handlers.
//!
//! After an attempt is recorded, the acting user's activity snapshot is
//! re-read and every not-yet-earned badge is checked against its rule. Each
//! award is a single database transaction (insert + point credit), so a
//! concurrent duplicate award degrades to a no-op.

use std::collections::HashSet;

use cyberguard_core::badges::{self, UserActivity};
use cyberguard_core::error::CoreError;
use cyberguard_core::types::DbId;
use cyberguard_db::models::badge::Badge;
use cyberguard_db::repositories::{AttemptRepo, BadgeRepo, PhishingRepo, UserRepo};
use cyberguard_db::DbPool;

use crate::error::{AppError, AppResult};

/// Evaluate every badge rule for a user and award the ones newly met.
///
/// Returns the badges awarded by this pass, in catalog order.
pub async fn evaluate_and_award(pool: &DbPool, user_id: DbId) -> AppResult<Vec<Badge>> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let activity = UserActivity {
        quizzes_taken: user.quizzes_taken,
        completed_modules: user.completed_modules,
        high_scoring_phishing_attempts: PhishingRepo::count_high_scoring(
            pool,
            user_id,
            badges::PHISHING_MASTERY_SCORE,
        )
        .await?,
        has_perfect_attempt: AttemptRepo::has_perfect_attempt(pool, user_id).await?,
    };

    let catalog = BadgeRepo::list_all(pool).await?;
    let earned: HashSet<DbId> = BadgeRepo::earned_badge_ids(pool, user_id)
        .await?
        .into_iter()
        .collect();

    let mut awarded = Vec::new();
    for badge in catalog {
        if earned.contains(&badge.id) {
            continue;
        }
        if !badges::qualifies(&badge.name, &activity) {
            continue;
        }
        if BadgeRepo::award(pool, user_id, badge.id, badge.points).await? {
            tracing::info!(
                user_id,
                badge = %badge.name,
                points = badge.points,
                "Badge awarded"
            );
            awarded.push(badge);
        }
    }

    Ok(awarded)
}
