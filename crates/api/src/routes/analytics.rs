//! Route definitions for admin analytics.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/admin/analytics`.
///
/// ```text
/// GET /weak-areas      -> failure rate per category
/// GET /completion-rate -> fraction of users with a completed module
/// GET /failed-quizzes  -> most-failed modules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/weak-areas", get(analytics::weak_areas_report))
        .route("/completion-rate", get(analytics::completion_rate_report))
        .route("/failed-quizzes", get(analytics::failed_quizzes_report))
}
