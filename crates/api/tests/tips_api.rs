//! HTTP-level integration tests for the daily security tip.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth};
use sqlx::PgPool;

/// The tip endpoint requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_daily_tip_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/tips/daily").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The daily tip comes from the seeded catalog and is stable within a day.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_daily_tip_returned(pool: PgPool) {
    let token = common::register_and_token(pool.clone(), "tipped@test.com").await;

    let app = common::build_test_app(pool.clone()).await;
    let response = get_auth(app, "/api/v1/tips/daily", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tip = json["data"]["tip"].as_str().unwrap();
    assert!(!tip.is_empty());

    // Same day, same tip.
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/tips/daily", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["tip"].as_str().unwrap(), tip);
}
