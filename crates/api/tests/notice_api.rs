//! HTTP-level tests for `/api/v1/notice`.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get, member_token, post_json, post_json_auth,
    put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;
use unisoc_db::repositories::NoticeRepo;

async fn create_notice(app: &axum::Router, token: &str, title: &str) -> serde_json::Value {
    let body = json!({ "title": title, "description": "Details to follow." });
    let response = post_json_auth(app, "/api/v1/notice", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_title_is_rejected_with_field_message(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool.clone());

    let response = post_json_auth(&app, "/api/v1/notice", &token, json!({ "title": "Hi" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["errors"]["title"]
        .as_str()
        .unwrap()
        .contains("at least 5 characters"));
    assert_eq!(NoticeRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn title_only_notice_appears_on_first_page(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);

    let body = json!({ "title": "Annual Meeting" });
    let response = post_json_auth(&app, "/api/v1/notice", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["title"], "Annual Meeting");
    assert_eq!(created["description"], "");

    let json = body_json(get(&app, "/api/v1/notice?page=1&limit=5").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["currentPage"], 1);
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["id"], created["id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_title_is_a_field_error(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool.clone());

    let body = json!({ "description": "No title given" });
    let response = post_json_auth(&app, "/api/v1/notice", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["errors"]["title"].is_string());
    assert_eq!(NoticeRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_token_leaves_store_untouched(pool: PgPool) {
    let (app, _) = common::build_test_app(pool.clone());

    let body = json!({ "title": "Annual Meeting", "description": "Agenda" });
    let response = post_json(&app, "/api/v1/notice", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "UNAUTHORIZED");
    assert_eq!(NoticeRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn members_cannot_publish(pool: PgPool) {
    let token = member_token(&pool).await;
    let (app, _) = common::build_test_app(pool.clone());

    let body = json!({ "title": "Annual Meeting", "description": "Agenda" });
    let response = post_json_auth(&app, "/api/v1/notice", &token, body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(NoticeRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn default_page_size_is_five(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);
    for n in 1..=7 {
        create_notice(&app, &token, &format!("Notice number {n}")).await;
    }

    let first = body_json(get(&app, "/api/v1/notice").await).await;
    assert_eq!(first["count"], 5);
    assert_eq!(first["total"], 7);
    assert_eq!(first["totalPages"], 2);
    // Newest first by default.
    assert_eq!(first["data"][0]["title"], "Notice number 7");

    let second = body_json(get(&app, "/api/v1/notice?page=2").await).await;
    assert_eq!(second["count"], 2);
    assert_eq!(second["currentPage"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sort_by_title_ascending(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);
    create_notice(&app, &token, "Bravo notice").await;
    create_notice(&app, &token, "Alpha notice").await;

    let json = body_json(get(&app, "/api/v1/notice?sort=title").await).await;
    assert_eq!(json["data"][0]["title"], "Alpha notice");
    assert_eq!(json["data"][1]["title"], "Bravo notice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_sort_column_is_rejected(pool: PgPool) {
    let (app, _) = common::build_test_app(pool);
    let response = get(&app, "/api/v1/notice?sort=-description").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_keeps_absent_fields(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);
    let created = create_notice(&app, &token, "Annual Meeting").await;
    let uri = format!("/api/v1/notice/{}", created["id"]);

    let response = put_json_auth(&app, &uri, &token, json!({ "title": "Annual General Meeting" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();

    assert_eq!(updated["title"], "Annual General Meeting");
    assert_eq!(updated["description"], "Details to follow.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleted_notice_is_gone(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);
    let created = create_notice(&app, &token, "Annual Meeting").await;
    let uri = format!("/api/v1/notice/{}", created["id"]);

    let response = delete_auth(&app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json.get("data").is_none());

    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete_auth(&app, &uri, &token).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_id_is_bad_request(pool: PgPool) {
    let (app, _) = common::build_test_app(pool);
    let response = get(&app, "/api/v1/notice/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "BAD_REQUEST");
}
