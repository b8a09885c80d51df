//! Route definitions for the `/progress` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress`.
///
/// ```text
/// GET  / -> list the user's progress
/// POST / -> record or update progress on a module
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(progress::list_progress).post(progress::upsert_progress),
    )
}
