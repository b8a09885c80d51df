//! HTTP-level integration tests for the phishing identification trainer.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth};
use sqlx::PgPool;

/// Ground-truth tags for the catalog's first email, used to drive grading.
const EMAIL1_THREATS: [&str; 4] = ["suspicious_sender", "urgency", "suspicious_link", "threat"];

async fn submit(
    pool: PgPool,
    token: &str,
    email_id: &str,
    selected: &[&str],
) -> axum::response::Response {
    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({
        "email_id": email_id,
        "selected_threats": selected,
    });
    post_json_auth(app, "/api/v1/phishing/attempts", body, token).await
}

async fn current_score(pool: PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/auth/user", token).await;
    body_json(response).await["cyber_hygiene_score"]
        .as_i64()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Phishing endpoints require authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_phishing_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/phishing/emails").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The catalog lists three emails and never exposes the ground truth.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_email_catalog_hides_ground_truth(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "spotter@test.com").await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/phishing/emails", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let emails = json["data"].as_array().unwrap();
    assert_eq!(emails.len(), 3);

    for email in emails {
        assert!(email["id"].is_string());
        assert!(email["from"].is_string());
        assert!(email["subject"].is_string());
        assert!(email["body"].is_string());
        assert!(email["category"].is_string());
        assert!(
            email.get("threats").is_none(),
            "catalog must not leak the answer key"
        );
    }
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

/// Selecting exactly the ground truth scores 100 and earns the bonus.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_perfect_detection(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "eagle@test.com").await;

    let response = submit(pool.clone(), &token, "email1", &EMAIL1_THREATS).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["attempt"]["score"], 100);
    assert_eq!(json["data"]["attempt"]["missed_threats"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["bonus_points"], 50);

    assert_eq!(current_score(pool, &token).await, 50);
}

/// Each incorrectly selected tag costs 10 points.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_false_positive_penalty(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "jumpy@test.com").await;

    let mut selected = EMAIL1_THREATS.to_vec();
    selected.push("authority");
    let response = submit(pool.clone(), &token, "email1", &selected).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["attempt"]["score"], 90);
    assert_eq!(json["data"]["false_positives"], serde_json::json!(["authority"]));
    // 90 still clears the bonus threshold.
    assert_eq!(json["data"]["bonus_points"], 50);
}

/// A low-scoring attempt gets no bonus and the user's score is unchanged.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_low_score_no_bonus(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "rookie@test.com").await;

    let response = submit(pool.clone(), &token, "email1", &["urgency"]).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["attempt"]["score"], 25);
    assert_eq!(json["data"]["bonus_points"], 0);
    assert_eq!(current_score(pool, &token).await, 0);
}

/// An unknown email id returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_email_id(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "nobody@test.com").await;

    let response = submit(pool, &token, "email99", &["urgency"]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A made-up threat tag is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_threat_tag(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "inventor@test.com").await;

    let response = submit(pool, &token, "email1", &["spoofed_header"]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// History and badges
// ---------------------------------------------------------------------------

/// Attempts accumulate in the user's history, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attempt_history(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "logged@test.com").await;

    submit(pool.clone(), &token, "email1", &["urgency"]).await;
    submit(pool.clone(), &token, "email2", &["urgency", "authority"]).await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/phishing/attempts", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let attempts = json["data"].as_array().unwrap();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0]["email_id"], "email2");
}

/// Three 90%+ attempts unlock the Phishing Master badge.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_phishing_master_badge(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "master@test.com").await;

    for _ in 0..3 {
        let response = submit(pool.clone(), &token, "email1", &EMAIL1_THREATS).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/user-badges", &token).await;
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Phishing Master"));
}
