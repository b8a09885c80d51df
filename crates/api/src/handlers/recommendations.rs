//! Handler for the "recommended next module" endpoint.

use std::collections::HashSet;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::recommendation::{recommend_next, CandidateModule, CategoryAttempt};
use cyberguard_db::repositories::{AttemptRepo, ModuleRepo, ProgressRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recommendations/next-module
///
/// Pick the module the user should study next: the first non-completed
/// module in their weakest quiz category, falling back to catalog order.
/// Responds 404 once every active module is completed.
pub async fn next_module(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let history = AttemptRepo::list_with_categories(&state.pool, user.user_id).await?;
    let attempts: Vec<CategoryAttempt> = history
        .into_iter()
        .map(|row| CategoryAttempt {
            category: row.category,
            score: row.score,
            total_questions: row.total_questions,
        })
        .collect();

    let modules = ModuleRepo::list_active(&state.pool).await?;
    let candidates: Vec<CandidateModule> = modules
        .iter()
        .map(|m| CandidateModule {
            id: m.id,
            category: m.category.clone(),
            order_index: m.order_index,
            is_active: m.is_active,
        })
        .collect();

    let completed: HashSet<_> = ProgressRepo::completed_module_ids(&state.pool, user.user_id)
        .await?
        .into_iter()
        .collect();

    let picked_id = recommend_next(&attempts, &candidates, &completed)
        .ok_or_else(|| AppError::NotFound("All modules completed".into()))?;

    // recommend_next only returns ids drawn from the candidate list.
    let module = modules
        .into_iter()
        .find(|m| m.id == picked_id)
        .ok_or_else(|| AppError::InternalError("Recommended module vanished".into()))?;

    Ok(Json(DataResponse { data: module }))
}
