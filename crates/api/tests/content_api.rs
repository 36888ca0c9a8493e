//! HTTP-level tests for messages, YouTube videos and hero images.

mod common;

use axum::http::{Method, StatusCode};
use common::{admin_token, body_json, delete_auth, get, multipart, PNG};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

const MESSAGE_FIELDS: &[(&str, &str)] = &[
    ("name", "Anita Gurung"),
    ("position", "President"),
    ("message", "Welcome to a new academic year together."),
];

#[sqlx::test(migrations = "../db/migrations")]
async fn message_lifecycle(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/messages",
        Some(&token),
        MESSAGE_FIELDS,
        Some(PNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let message = body_json(response).await["data"].clone();
    assert_eq!(message["position"], "President");
    assert_eq!(blobs.len(), 1);

    let uri = format!("/api/v1/messages/{}", message["id"]);
    let response = multipart(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        &[("position", "Former President")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["position"], "Former President");
    assert_eq!(updated["name"], "Anita Gurung");

    let list = body_json(get(&app, "/api/v1/messages").await).await;
    assert_eq!(list["total"], 1);

    assert_eq!(delete_auth(&app, &uri, &token).await.status(), StatusCode::OK);
    assert!(blobs.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn message_fields_are_validated_before_upload(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/messages",
        Some(&token),
        &[("name", "Anita Gurung")],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["errors"]["position"].is_string());
    assert!(json["errors"]["message"].is_string());
    assert!(blobs.is_empty());
}

// ---------------------------------------------------------------------------
// YouTube videos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn video_id_is_derived_from_url(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/youtube-videos",
        Some(&token),
        &[
            ("title", "Cultural night highlights"),
            ("url", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        ],
        Some(PNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let video = body_json(response).await["data"].clone();
    assert_eq!(video["video_id"], "dQw4w9WgXcQ");

    let uri = format!("/api/v1/youtube-videos/{}", video["id"]);
    let response = multipart(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        &[("url", "https://youtu.be/9bZkp7q19f0")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["video_id"], "9bZkp7q19f0");
    assert_eq!(updated["title"], "Cultural night highlights");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_youtube_url_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/youtube-videos",
        Some(&token),
        &[("title", "Cultural night"), ("url", "https://vimeo.com/123456")],
        Some(PNG),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"]["url"],
        "Please provide a valid YouTube video URL"
    );
    assert!(blobs.is_empty());
}

// ---------------------------------------------------------------------------
// Hero images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn hero_image_caption_is_optional(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, blobs) = common::build_test_app(pool);

    let response = multipart(
        &app,
        Method::POST,
        "/api/v1/hero-images",
        Some(&token),
        &[],
        Some(PNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let hero = body_json(response).await["data"].clone();
    assert!(hero["caption"].is_null());

    let uri = format!("/api/v1/hero-images/{}", hero["id"]);
    let response = multipart(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        &[("caption", "Welcome week")],
        Some(PNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["caption"], "Welcome week");
    assert_ne!(updated["public_id"], hero["public_id"]);
    assert_eq!(blobs.len(), 1);

    let fetched = body_json(get(&app, &uri).await).await;
    assert_eq!(fetched["data"]["caption"], "Welcome week");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_missing_hero_image_is_404(pool: PgPool) {
    let token = admin_token(&pool).await;
    let (app, _) = common::build_test_app(pool);

    let response = delete_auth(&app, "/api/v1/hero-images/4242", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
