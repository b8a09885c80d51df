pub mod analytics;
pub mod auth;
pub mod badges;
pub mod health;
pub mod modules;
pub mod phishing;
pub mod progress;
pub mod questions;
pub mod quiz_attempts;
pub mod recommendations;
pub mod tips;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
/// /auth/user                         current user (requires auth)
///
/// /modules                           list, create
/// /modules/{id}                      get
/// /modules/{id}/questions            list questions
/// /questions                         create question (POST)
///
/// /progress                          list, upsert (GET, POST)
///
/// /quiz-attempts                     list, record (GET, POST)
///
/// /badges                            badge catalog (GET)
/// /user-badges                       earned badges (GET)
///
/// /phishing/emails                   simulation catalog (GET)
/// /phishing/attempts                 list, grade + record (GET, POST)
///
/// /recommendations/next-module       recommended next module (GET)
///
/// /tips/daily                        daily security tip (GET)
///
/// /tools/password-check              password strength check (POST)
///
/// /admin/analytics/weak-areas        failure rate per category (GET)
/// /admin/analytics/completion-rate   users with a completed module (GET)
/// /admin/analytics/failed-quizzes    most-failed modules (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout, user).
        .nest("/auth", auth::router())
        // Training content.
        .nest("/modules", modules::router())
        .nest("/questions", questions::router())
        // Learning state.
        .nest("/progress", progress::router())
        .nest("/quiz-attempts", quiz_attempts::router())
        // Gamification.
        .nest("/badges", badges::router())
        .nest("/user-badges", badges::user_router())
        // Phishing trainer.
        .nest("/phishing", phishing::router())
        // Guidance.
        .nest("/recommendations", recommendations::router())
        .nest("/tips", tips::router())
        .nest("/tools", tools::router())
        // Admin analytics.
        .nest("/admin/analytics", analytics::router())
}
