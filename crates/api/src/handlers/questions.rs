//! Handlers for quiz questions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::error::CoreError;
use cyberguard_core::types::DbId;
use cyberguard_db::models::question::CreateQuizQuestion;
use cyberguard_db::repositories::{ModuleRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/modules/{id}/questions
///
/// List a module's quiz questions in presentation order. The correct answer
/// index and explanation ride along; clients are trusted to hide them until
/// the learner submits.
pub async fn list_module_questions(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(module_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let module = ModuleRepo::find_by_id(&state.pool, module_id).await?;
    if module.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: module_id,
        }));
    }

    let questions = QuestionRepo::list_for_module(&state.pool, module_id).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// POST /api/v1/questions
///
/// Create a quiz question under an existing module.
pub async fn create_question(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateQuizQuestion>,
) -> AppResult<impl IntoResponse> {
    let module = ModuleRepo::find_by_id(&state.pool, input.module_id).await?;
    if module.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: input.module_id,
        }));
    }

    if input.question.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Question text must not be empty".into(),
        )));
    }
    if input.options.len() < 2 {
        return Err(AppError::Core(CoreError::Validation(
            "A question needs at least two options".into(),
        )));
    }
    if input.correct_answer < 0 || input.correct_answer as usize >= input.options.len() {
        return Err(AppError::Core(CoreError::Validation(
            "correct_answer must index into options".into(),
        )));
    }

    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        question_id = question.id,
        module_id = question.module_id,
        "Created quiz question"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}
