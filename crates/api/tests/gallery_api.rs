//! HTTP-level tests for `/api/v1/gallery`, including the image lifecycle.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{
    admin_token, body_json, delete_auth, get, multipart, FailingBlobStore, HOST_DOWN, PNG,
};
use sqlx::PgPool;
use unisoc_db::repositories::GalleryRepo;

async fn upload(app: &axum::Router, token: &str, tag: &str) -> serde_json::Value {
    let response = multipart(
        app,
        Method::POST,
        "/api/v1/gallery",
        Some(token),
        &[("title", "Freshers night"), ("tag", tag)],
        Some(PNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_stores_blob_and_record(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let image = upload(&app, &token, "Programs").await;

    let public_id = image["public_id"].as_str().unwrap();
    assert!(blobs.contains(public_id));
    assert_eq!(image["path"], format!("memory://{public_id}"));
    assert_eq!(image["tag"], "Programs");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_tag_never_uploads(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool.clone());

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/gallery",
        Some(&token),
        &[("tag", "Parties")],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["errors"]["tag"].is_string());
    assert!(blobs.is_empty());
    assert_eq!(GalleryRepo::count(&pool, None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn image_is_required_on_create(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/gallery",
        Some(&token),
        &[("tag", "Programs")],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"]["image"],
        "Image file is required"
    );
    assert!(blobs.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_image_upload_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/gallery",
        Some(&token),
        &[("tag", "Programs")],
        Some(b"#!/bin/sh\necho hi\n"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["errors"]["image"].is_string());
    assert!(blobs.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unauthenticated_upload_is_refused(pool: PgPool) {
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/gallery",
        None,
        &[("tag", "Programs")],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(blobs.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_image_replaces_blob(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);
    let original = upload(&app, &token, "Programs").await;
    let old_id = original["public_id"].as_str().unwrap().to_string();

    let response = multipart(
        &app,
        Method::PUT,
        &format!("/api/v1/gallery/{}", original["id"]),
        Some(&token),
        &[("title", "Freshers night 2025")],
        Some(PNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();

    let new_id = updated["public_id"].as_str().unwrap();
    assert_ne!(new_id, old_id);
    assert!(blobs.contains(new_id));
    assert!(!blobs.contains(&old_id));
    assert_eq!(blobs.len(), 1);
    assert_eq!(updated["title"], "Freshers night 2025");
    assert_eq!(updated["tag"], "Programs");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_without_image_keeps_blob(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);
    let original = upload(&app, &token, "Programs").await;

    let response = multipart(
        &app,
        Method::PUT,
        &format!("/api/v1/gallery/{}", original["id"]),
        Some(&token),
        &[("tag", "Relief")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();

    assert_eq!(updated["public_id"], original["public_id"]);
    assert_eq!(updated["tag"], "Relief");
    assert!(blobs.contains(original["public_id"].as_str().unwrap()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_of_missing_record_uploads_nothing(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::PUT,
        "/api/v1/gallery/9999",
        Some(&token),
        &[],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(blobs.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_blob_and_record(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);
    let image = upload(&app, &token, "Programs").await;
    let uri = format!("/api/v1/gallery/{}", image["id"]);

    let response = delete_auth(&app, &uri, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(blobs.is_empty());
    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_tag(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);
    upload(&app, &token, "Programs").await;
    upload(&app, &token, "Programs").await;
    upload(&app, &token, "Relief").await;

    let programs = body_json(get(&app, "/api/v1/gallery?tag=Programs").await).await;
    assert_eq!(programs["total"], 2);
    assert_eq!(programs["count"], 2);

    let all = body_json(get(&app, "/api/v1/gallery?limit=2").await).await;
    assert_eq!(all["total"], 3);
    assert_eq!(all["count"], 2);
    assert_eq!(all["totalPages"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_invalid_tag_changes_nothing(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool.clone());
    let original = upload(&app, &token, "Programs").await;
    let id = original["id"].as_i64().unwrap();

    let response = multipart(
        &app,
        Method::PUT,
        &format!("/api/v1/gallery/{id}"),
        Some(&token),
        &[("tag", "Parties")],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert!(json["errors"]["tag"].is_string());

    let stored = GalleryRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.tag, "Programs");
    assert_eq!(stored.public_id, original["public_id"].as_str().unwrap());
    assert_eq!(blobs.len(), 1);
}

// ---------------------------------------------------------------------------
// Image host failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_store_creates_no_record(pool: PgPool) {
    let token = admin_token(&pool).await;
    let blobs = Arc::new(FailingBlobStore::default());
    let app = common::build_test_app_with(pool.clone(), blobs.clone());
    blobs.fail_store(true);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/gallery",
        Some(&token),
        &[("tag", "Programs")],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["message"]
        .as_str()
        .unwrap()
        .contains(HOST_DOWN));
    assert_eq!(GalleryRepo::count(&pool, None).await.unwrap(), 0);
    assert!(blobs.inner.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_blob_delete_keeps_record(pool: PgPool) {
    let token = admin_token(&pool).await;
    let blobs = Arc::new(FailingBlobStore::default());
    let app = common::build_test_app_with(pool.clone(), blobs.clone());
    let image = upload(&app, &token, "Relief").await;
    let id = image["id"].as_i64().unwrap();
    blobs.fail_delete(true);

    let response = delete_auth(&app, &format!("/api/v1/gallery/{id}"), &token).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains(HOST_DOWN));
    assert!(GalleryRepo::find_by_id(&pool, id).await.unwrap().is_some());
    assert!(blobs.inner.contains(image["public_id"].as_str().unwrap()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_cleanup_of_replaced_blob_still_updates(pool: PgPool) {
    let token = admin_token(&pool).await;
    let blobs = Arc::new(FailingBlobStore::default());
    let app = common::build_test_app_with(pool.clone(), blobs.clone());
    let original = upload(&app, &token, "Programs").await;
    blobs.fail_delete(true);

    let response = multipart(
        &app,
        Method::PUT,
        &format!("/api/v1/gallery/{}", original["id"]),
        Some(&token),
        &[],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_ne!(updated["public_id"], original["public_id"]);
    // The old blob could not be removed and is left behind.
    assert_eq!(blobs.inner.len(), 2);
}
