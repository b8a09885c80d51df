//! Handler for the daily security tip.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use cyberguard_core::tips::{daily_tip_index, FALLBACK_TIP};
use cyberguard_db::repositories::TipRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DailyTip {
    pub tip: String,
}

/// GET /api/v1/tips/daily
///
/// Return today's security tip. The tip rotates daily through the stored
/// list; an empty table falls back to a canned tip rather than erroring.
pub async fn daily_tip(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tips = TipRepo::list_all(&state.pool).await?;

    let tip = match daily_tip_index(Utc::now().date_naive(), tips.len()) {
        Some(index) => tips[index].tip.clone(),
        None => FALLBACK_TIP.to_string(),
    };

    Ok(Json(DataResponse {
        data: DailyTip { tip },
    }))
}
