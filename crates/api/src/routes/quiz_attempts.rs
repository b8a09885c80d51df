//! Route definitions for the `/quiz-attempts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::quiz_attempts;
use crate::state::AppState;

/// Routes mounted at `/quiz-attempts`.
///
/// ```text
/// GET  / -> list the user's attempts
/// POST / -> record an attempt (credits points, may award badges)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(quiz_attempts::list_attempts).post(quiz_attempts::create_attempt),
    )
}
