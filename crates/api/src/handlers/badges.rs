//! Handlers for the badge catalog and earned badges.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_db::repositories::BadgeRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/badges
///
/// List the full badge catalog.
pub async fn list_badges(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let badges = BadgeRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: badges }))
}

/// GET /api/v1/user-badges
///
/// List the authenticated user's earned badges, most recent first.
pub async fn list_user_badges(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let earned = BadgeRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: earned }))
}
