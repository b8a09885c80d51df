//! Handlers for per-module learning progress.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::error::CoreError;
use cyberguard_core::progress::ProgressStatus;
use cyberguard_db::models::progress::UpsertProgress;
use cyberguard_db::repositories::{ModuleRepo, ProgressRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/progress
///
/// List the authenticated user's progress rows, most recently touched first.
pub async fn list_progress(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = ProgressRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/progress
///
/// Record or update the user's progress on a module. The same endpoint moves
/// a module through not_started, in_progress, and completed; repeating a
/// status is allowed and bumps the attempt count.
pub async fn upsert_progress(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertProgress>,
) -> AppResult<impl IntoResponse> {
    let status = ProgressStatus::from_str(&input.status).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown progress status: {}",
            input.status
        )))
    })?;

    if let Some(score) = input.score {
        if score < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Score must not be negative".into(),
            )));
        }
    }

    let module = ModuleRepo::find_by_id(&state.pool, input.module_id).await?;
    if module.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: input.module_id,
        }));
    }

    let row = ProgressRepo::upsert(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        module_id = input.module_id,
        status = status.as_str(),
        "Recorded progress"
    );

    Ok(Json(DataResponse { data: row }))
}
