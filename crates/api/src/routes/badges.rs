//! Route definitions for badges.

use axum::routing::get;
use axum::Router;

use crate::handlers::badges;
use crate::state::AppState;

/// Routes mounted at `/badges`.
///
/// ```text
/// GET / -> badge catalog
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(badges::list_badges))
}

/// Routes mounted at `/user-badges`.
///
/// ```text
/// GET / -> the user's earned badges
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/", get(badges::list_user_badges))
}
