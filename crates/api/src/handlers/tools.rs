//! Handlers for self-service security tools.

use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::password_strength::evaluate;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// Request body for `POST /tools/password-check`.
#[derive(Debug, Deserialize)]
pub struct PasswordCheckRequest {
    pub password: String,
}

/// POST /api/v1/tools/password-check
///
/// Evaluate a candidate password against the strength checklist. The
/// password is graded in memory and never stored or logged.
pub async fn password_check(
    _user: AuthUser,
    Json(input): Json<PasswordCheckRequest>,
) -> AppResult<impl IntoResponse> {
    let report = evaluate(&input.password);
    Ok(Json(DataResponse { data: report }))
}
