//! Route definitions for the `/tips` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tips;
use crate::state::AppState;

/// Routes mounted at `/tips`.
///
/// ```text
/// GET /daily -> today's security tip
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/daily", get(tips::daily_tip))
}
