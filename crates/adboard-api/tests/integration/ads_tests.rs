use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;
use uuid::Uuid;

use crate::integration::common::{seed_and_login, send_json, setup_test_app};

#[tokio::test]
async fn list_without_token_is_missing_token() {
    let app = setup_test_app().await;

    let (status, json) = send_json(&app.router, "GET", "/api/admin/ads", None, None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Unauthorized");
}

#[tokio::test]
async fn list_with_expired_token_is_invalid() {
    let app = setup_test_app().await;
    let expired = app
        .state
        .issuer
        .issue_with_ttl(Uuid::new_v4(), Duration::seconds(-1))
        .unwrap();

    let (status, json) =
        send_json(&app.router, "GET", "/api/admin/ads", Some(&expired.token), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Invalid token");
}

#[tokio::test]
async fn list_with_fresh_token_succeeds() {
    let app = setup_test_app().await;
    let token = seed_and_login(&app.router).await;

    let (status, json) = send_json(&app.router, "GET", "/api/admin/ads", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["ads"], json!([]));
}

#[tokio::test]
async fn create_without_token_is_rejected() {
    let app = setup_test_app().await;

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/admin/ads",
        None,
        Some(json!({"title": "T", "description": "D"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(app.state.db.ad_repo().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_then_list() {
    let app = setup_test_app().await;
    let token = seed_and_login(&app.router).await;

    let (status, json) = send_json(
        &app.router,
        "POST",
        "/api/admin/ads",
        Some(&token),
        Some(json!({"title": "T", "description": "D"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Ad created successfully");
    assert_eq!(json["ad"]["title"], "T");
    assert_eq!(json["ad"]["description"], "D");
    assert!(json["ad"]["createdAt"].is_string());
    let ad_id = json["ad"]["id"].clone();

    let (status, json) = send_json(&app.router, "GET", "/api/admin/ads", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let ads = json["ads"].as_array().unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0]["id"], ad_id);
    assert_eq!(ads[0]["title"], "T");
    assert_eq!(ads[0]["description"], "D");
}

#[tokio::test]
async fn create_requires_title_and_description() {
    let app = setup_test_app().await;
    let token = seed_and_login(&app.router).await;

    let (status, json) = send_json(
        &app.router,
        "POST",
        "/api/admin/ads",
        Some(&token),
        Some(json!({"title": "T"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(app.state.db.ad_repo().list().await.unwrap().is_empty());
}
