//! Handlers for the `/modules` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::error::CoreError;
use cyberguard_core::types::DbId;
use cyberguard_db::models::module::CreateModule;
use cyberguard_db::repositories::ModuleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/modules
///
/// List all active training modules, ordered by their display position.
pub async fn list_modules(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let modules = ModuleRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: modules }))
}

/// GET /api/v1/modules/{id}
///
/// Fetch a single module, including its full lesson content.
pub async fn get_module(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let module = ModuleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id,
        }))?;
    Ok(Json(DataResponse { data: module }))
}

/// POST /api/v1/modules
///
/// Create a new training module.
pub async fn create_module(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateModule>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Module title must not be empty".into(),
        )));
    }
    if input.category.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Module category must not be empty".into(),
        )));
    }

    let module = ModuleRepo::create(&state.pool, &input).await?;

    tracing::info!(module_id = module.id, title = %module.title, "Created module");

    Ok((StatusCode::CREATED, Json(DataResponse { data: module })))
}
