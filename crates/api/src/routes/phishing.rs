//! Route definitions for the `/phishing` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::phishing;
use crate::state::AppState;

/// Routes mounted at `/phishing`.
///
/// ```text
/// GET  /emails   -> simulation catalog (without ground truth)
/// GET  /attempts -> list the user's attempts
/// POST /attempts -> grade and record an attempt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/emails", get(phishing::list_emails))
        .route(
            "/attempts",
            get(phishing::list_attempts).post(phishing::create_attempt),
        )
}
