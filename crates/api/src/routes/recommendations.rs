//! Route definitions for the `/recommendations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::recommendations;
use crate::state::AppState;

/// Routes mounted at `/recommendations`.
///
/// ```text
/// GET /next-module -> recommended next module
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/next-module", get(recommendations::next_module))
}
