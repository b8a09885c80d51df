//! Handlers for quiz attempts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::error::CoreError;
use cyberguard_core::progress::{quiz_points, validate_attempt_counts};
use cyberguard_db::models::attempt::CreateQuizAttempt;
use cyberguard_db::repositories::{AttemptRepo, ModuleRepo, UserRepo};

use crate::awards::evaluate_and_award;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/quiz-attempts
///
/// List the authenticated user's quiz attempts, newest first.
pub async fn list_attempts(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let attempts = AttemptRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: attempts }))
}

/// POST /api/v1/quiz-attempts
///
/// Record a finished quiz attempt. A passing attempt credits points, and any
/// badge thresholds the attempt crosses are awarded before the response goes
/// out.
pub async fn create_attempt(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateQuizAttempt>,
) -> AppResult<impl IntoResponse> {
    // 1. Validate counts before touching the database.
    validate_attempt_counts(input.score, input.total_questions)?;

    let module = ModuleRepo::find_by_id(&state.pool, input.module_id).await?;
    if module.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: input.module_id,
        }));
    }

    // 2. Persist the attempt (also bumps the user's quizzes_taken counter).
    let attempt = AttemptRepo::create(&state.pool, user.user_id, &input).await?;

    // 3. Credit points for a passing attempt.
    if let Some(points) = quiz_points(input.score, input.total_questions) {
        UserRepo::add_points(&state.pool, user.user_id, points).await?;
        tracing::info!(
            user_id = user.user_id,
            module_id = input.module_id,
            points,
            "Credited quiz points"
        );
    }

    // 4. Award any badges this attempt unlocked.
    evaluate_and_award(&state.pool, user.user_id).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: attempt })))
}
