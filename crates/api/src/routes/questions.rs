//! Route definitions for the `/questions` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// POST / -> create question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(questions::create_question))
}
