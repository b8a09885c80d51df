//! Route definitions for the `/modules` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{modules, questions};
use crate::state::AppState;

/// Routes mounted at `/modules`.
///
/// ```text
/// GET  /                -> list active modules
/// POST /                -> create module
/// GET  /{id}            -> get module
/// GET  /{id}/questions  -> list module questions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(modules::list_modules).post(modules::create_module))
        .route("/{id}", get(modules::get_module))
        .route("/{id}/questions", get(questions::list_module_questions))
}
