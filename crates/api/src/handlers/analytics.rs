//! Handlers for admin analytics reports.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::analytics::{completion_rate, weak_areas};
use cyberguard_db::repositories::AnalyticsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CompletionRateReport {
    pub completion_rate: f64,
}

/// GET /api/v1/admin/analytics/weak-areas
///
/// Failure rate per module category across all users' quiz attempts, worst
/// first. Categories nobody has attempted are absent.
pub async fn weak_areas_report(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let counts = AnalyticsRepo::category_counts(&state.pool).await?;
    let areas = weak_areas(counts);
    Ok(Json(DataResponse { data: areas }))
}

/// GET /api/v1/admin/analytics/completion-rate
///
/// Fraction of users who have completed at least one module.
pub async fn completion_rate_report(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let counts = AnalyticsRepo::user_completion_counts(&state.pool).await?;
    let rate = completion_rate(counts.completed_users, counts.total_users);
    Ok(Json(DataResponse {
        data: CompletionRateReport {
            completion_rate: rate,
        },
    }))
}

/// GET /api/v1/admin/analytics/failed-quizzes
///
/// The five modules with the most failed quiz attempts.
pub async fn failed_quizzes_report(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let modules = AnalyticsRepo::most_failed_modules(&state.pool, 5).await?;
    Ok(Json(DataResponse { data: modules }))
}
