//! Handlers for the phishing identification trainer.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cyberguard_core::error::CoreError;
use cyberguard_core::phishing::{self, ThreatTag};
use cyberguard_db::models::phishing::CreatePhishingAttempt;
use cyberguard_db::repositories::{PhishingRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::awards::evaluate_and_award;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A catalog email as shown to clients. Deliberately omits the ground-truth
/// threat list.
#[derive(Debug, Serialize)]
pub struct PhishingEmailView {
    pub id: &'static str,
    pub from: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub category: &'static str,
}

/// Request body for `POST /phishing/attempts`.
#[derive(Debug, Deserialize)]
pub struct SubmitPhishingAttempt {
    pub email_id: String,
    /// Threat tags the user selected, as their snake_case string names.
    pub selected_threats: Vec<String>,
}

/// Response body for a graded attempt: the stored row plus the grading
/// breakdown the client renders as feedback.
#[derive(Debug, Serialize)]
pub struct GradedAttempt {
    pub attempt: cyberguard_db::models::phishing::PhishingAttempt,
    pub false_positives: Vec<String>,
    pub bonus_points: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/phishing/emails
///
/// List the simulation catalog without the ground-truth threat lists.
pub async fn list_emails(_user: AuthUser) -> AppResult<impl IntoResponse> {
    let emails: Vec<PhishingEmailView> = phishing::PHISHING_EMAILS
        .iter()
        .map(|e| PhishingEmailView {
            id: e.id,
            from: e.from,
            subject: e.subject,
            body: e.body,
            category: e.category,
        })
        .collect();
    Ok(Json(DataResponse { data: emails }))
}

/// POST /api/v1/phishing/attempts
///
/// Grade a threat selection against an email's ground truth and record the
/// result. A high-scoring attempt earns a flat point bonus.
pub async fn create_attempt(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitPhishingAttempt>,
) -> AppResult<impl IntoResponse> {
    // 1. Resolve the catalog email.
    let email = phishing::find_email(&input.email_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown email id: {}", input.email_id)))?;

    // 2. Parse the selected tags, rejecting unknown names.
    let mut selected = Vec::with_capacity(input.selected_threats.len());
    for raw in &input.selected_threats {
        let tag = ThreatTag::from_str(raw).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown threat tag: {raw}")))
        })?;
        selected.push(tag);
    }

    // 3. Grade.
    let grade = phishing::grade(email, &selected);

    // 4. Persist the attempt.
    let create = CreatePhishingAttempt {
        email_id: email.id.to_string(),
        detected_threats: grade.detected.iter().map(|t| t.as_str().into()).collect(),
        missed_threats: grade.missed.iter().map(|t| t.as_str().into()).collect(),
        score: grade.score,
    };
    let attempt = PhishingRepo::create(&state.pool, user.user_id, &create).await?;

    // 5. Credit the bonus for a high score.
    let bonus = phishing::bonus_points(grade.score).unwrap_or(0);
    if bonus > 0 {
        UserRepo::add_points(&state.pool, user.user_id, bonus).await?;
        tracing::info!(
            user_id = user.user_id,
            email_id = %email.id,
            bonus,
            "Credited phishing bonus points"
        );
    }

    // 6. Award any badges this attempt unlocked.
    evaluate_and_award(&state.pool, user.user_id).await?;

    let response = GradedAttempt {
        attempt,
        false_positives: grade
            .false_positives
            .iter()
            .map(|t| t.as_str().into())
            .collect(),
        bonus_points: bonus,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// GET /api/v1/phishing/attempts
///
/// List the authenticated user's phishing attempts, newest first.
pub async fn list_attempts(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let attempts = PhishingRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: attempts }))
}
