//! HTTP-level integration tests for the badge catalog and earned badges.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth};
use sqlx::PgPool;

/// Badge endpoints require authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_badges_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/badges").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The migration-seeded catalog lists all six badges.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_badge_catalog_seeded(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "collector@test.com").await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/badges", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let badges = json["data"].as_array().unwrap();
    assert_eq!(badges.len(), 6);

    let names: Vec<&str> = badges.iter().map(|b| b["name"].as_str().unwrap()).collect();
    for expected in [
        "First Steps",
        "Password Pro",
        "Phishing Master",
        "Quiz Champion",
        "Perfect Score",
        "Dedicated Learner",
    ] {
        assert!(names.contains(&expected), "catalog missing {expected}");
    }

    // Each entry carries its requirement text and point value.
    assert!(badges[0]["requirement"].is_string());
    assert!(badges[0]["points"].is_number());
}

/// A fresh account has earned no badges.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_badges_empty_initially(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "fresh@test.com").await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/user-badges", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
