//! Route definitions for the `/tools` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Routes mounted at `/tools`.
///
/// ```text
/// POST /password-check -> evaluate password strength
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/password-check", post(tools::password_check))
}
