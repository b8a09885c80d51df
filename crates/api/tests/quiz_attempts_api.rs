//! HTTP-level integration tests for quiz attempts, point credit, and the
//! badges attempts unlock.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_module(pool: PgPool, token: &str, title: &str) -> i64 {
    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({
        "title": title,
        "description": "desc",
        "category": "Phishing Prevention",
        "difficulty": "Beginner",
        "content": "# Lesson",
        "estimated_minutes": 5,
        "order_index": 1,
    });
    let response = post_json_auth(app, "/api/v1/modules", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn submit_attempt(
    pool: PgPool,
    token: &str,
    module_id: i64,
    score: i32,
    total: i32,
) -> axum::response::Response {
    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({
        "module_id": module_id,
        "score": score,
        "total_questions": total,
        "answers": [0, 1, 2],
    });
    post_json_auth(app, "/api/v1/quiz-attempts", body, token).await
}

async fn current_score(pool: PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/auth/user", token).await;
    body_json(response).await["cyber_hygiene_score"]
        .as_i64()
        .unwrap()
}

async fn earned_badge_names(pool: PgPool, token: &str) -> Vec<String> {
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/user-badges", token).await;
    body_json(response).await["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Recording attempts
// ---------------------------------------------------------------------------

/// Attempt endpoints require authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attempts_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/quiz-attempts").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A recorded attempt comes back in the listing, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_attempt_and_list(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "taker@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Quiz Module").await;

    let response = submit_attempt(pool.clone(), &token, module_id, 3, 5).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["score"], 3);
    assert_eq!(json["data"]["total_questions"], 5);

    let app = common::build_test_app(pool.clone()).await;
    let response = get_auth(app, "/api/v1/quiz-attempts", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // The attempt also bumps the lifetime counter on the profile.
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/auth/user", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["quizzes_taken"], 1);
}

/// A score above total_questions is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attempt_score_out_of_range(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "cheater@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Honest Module").await;

    let response = submit_attempt(pool, &token, module_id, 6, 5).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// An attempt against a missing module returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attempt_missing_module(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "lost@test.com").await;

    let response = submit_attempt(pool, &token, 777, 3, 5).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Points
// ---------------------------------------------------------------------------

/// A passing attempt (70%+) credits floor(100 * score/total) points, plus the
/// First Steps badge bonus for the first quiz.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_passing_attempt_credits_points(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "passer@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Pass Module").await;

    submit_attempt(pool.clone(), &token, module_id, 4, 5).await;

    // 80 quiz points + 50 for the First Steps badge.
    assert_eq!(current_score(pool.clone(), &token).await, 130);
    let names = earned_badge_names(pool, &token).await;
    assert!(names.contains(&"First Steps".to_string()));
}

/// A failing attempt credits no quiz points. The First Steps badge still
/// lands because it counts attempts, not passes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_failing_attempt_credits_no_quiz_points(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "failer@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Fail Module").await;

    submit_attempt(pool.clone(), &token, module_id, 2, 5).await;

    assert_eq!(current_score(pool, &token).await, 50);
}

/// 69% is below the passing threshold; 70% is at it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_passing_threshold_boundary(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "edge@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Edge Module").await;

    // 69/100 fails: no quiz points, just First Steps.
    submit_attempt(pool.clone(), &token, module_id, 69, 100).await;
    assert_eq!(current_score(pool.clone(), &token).await, 50);

    // 70/100 passes: +70 quiz points, no new badge.
    submit_attempt(pool.clone(), &token, module_id, 70, 100).await;
    assert_eq!(current_score(pool, &token).await, 120);
}

/// Points are credited per attempt; badges are not re-awarded.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_badges_awarded_once(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "again@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Repeat Module").await;

    submit_attempt(pool.clone(), &token, module_id, 4, 5).await;
    submit_attempt(pool.clone(), &token, module_id, 4, 5).await;

    // 80 + 50 (First Steps) + 80, with no second badge credit.
    assert_eq!(current_score(pool.clone(), &token).await, 210);
    let names = earned_badge_names(pool, &token).await;
    assert_eq!(
        names.iter().filter(|n| *n == "First Steps").count(),
        1,
        "a badge must only be earned once"
    );
}

// ---------------------------------------------------------------------------
// Badge unlocks
// ---------------------------------------------------------------------------

/// A perfect attempt unlocks the Perfect Score badge.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_perfect_attempt_unlocks_badge(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "perfect@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Perfect Module").await;

    submit_attempt(pool.clone(), &token, module_id, 5, 5).await;

    // 100 quiz points + 50 (First Steps) + 150 (Perfect Score).
    assert_eq!(current_score(pool.clone(), &token).await, 300);
    let names = earned_badge_names(pool, &token).await;
    assert!(names.contains(&"Perfect Score".to_string()));
}

/// Ten attempts unlock the Quiz Champion badge.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_quiz_champion_after_ten_attempts(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "champion@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Marathon Module").await;

    for _ in 0..10 {
        submit_attempt(pool.clone(), &token, module_id, 2, 5).await;
    }

    let names = earned_badge_names(pool, &token).await;
    assert!(names.contains(&"Quiz Champion".to_string()));
}

/// Completing a module then taking a quiz unlocks Password Pro.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_password_pro_after_module_completion(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "pro@test.com").await;
    let module_id = create_module(pool.clone(), &token, "Any Module").await;

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({
        "module_id": module_id,
        "status": "completed",
        "score": 100,
    });
    post_json_auth(app, "/api/v1/progress", body, &token).await;

    // Badge evaluation runs on the next attempt submission.
    submit_attempt(pool.clone(), &token, module_id, 2, 5).await;

    let names = earned_badge_names(pool, &token).await;
    assert!(names.contains(&"Password Pro".to_string()));
}
