mod common;

use axum::http::StatusCode;
use common::{TestApp, detail_path};
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_comment_created(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/comment", post.id))
        .json(&json!({
            "name": "  Ann  ",
            "email": "ann@example.com",
            "body": "Great read"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["post"]["id"], post.id);
    assert_eq!(json["comment"]["name"], "Ann");
    assert_eq!(json["comment"]["body"], "Great read");
    assert!(json["comment"].get("email").is_none());
    assert_eq!(app.comment_count().await, 1);

    let detail = app.server.get(&format!("/api{}", detail_path(&post))).await;
    assert_eq!(detail.json::<Value>()["comments"][0]["name"], "Ann");
}

#[sqlx::test]
async fn test_comment_field_errors(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/comment", post.id))
        .json(&json!({
            "name": "Ann",
            "email": "not-an-email",
            "body": "   "
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["errors"]["email"][0], "Enter a valid email address.");
    assert_eq!(json["errors"]["body"][0], "This field is required.");
    assert!(json["errors"].get("name").is_none());
    assert_eq!(json["form"]["email"], "not-an-email");
    assert_eq!(app.comment_count().await, 0);
}

#[sqlx::test]
async fn test_comment_missing_fields_are_required(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/comment", post.id))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let errors = &response.json::<Value>()["errors"];
    for field in ["name", "email", "body"] {
        assert_eq!(errors[field], json!(["This field is required."]));
    }
}

#[sqlx::test]
async fn test_comment_name_too_long(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/comment", post.id))
        .json(&json!({
            "name": "x".repeat(81),
            "email": "ann@example.com",
            "body": "Body"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["errors"]["name"][0],
        "Ensure this value has at most 80 characters."
    );
}

#[sqlx::test]
async fn test_comment_email_too_long(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;
    let label = "b".repeat(63);
    let email = format!("{}@{label}.{label}.{label}.com", "a".repeat(64));

    let response = app
        .server
        .post(&format!("/api/posts/{}/comment", post.id))
        .json(&json!({ "name": "Ann", "email": email, "body": "Body" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["errors"]["email"][0],
        "Ensure this value has at most 254 characters."
    );
    assert_eq!(app.comment_count().await, 0);
}

#[sqlx::test]
async fn test_comment_malformed_json_is_bad_request(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/comment", post.id))
        .bytes(r#"{"name": "Ann","#.into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["reason"].is_string());
    assert_eq!(app.comment_count().await, 0);
}

#[sqlx::test]
async fn test_comment_on_unpublished_or_unknown_post(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let draft = app.draft_post("Draft", 2).await;
    let body = json!({ "name": "Ann", "email": "ann@example.com", "body": "Hi" });

    for path in [
        format!("/api/posts/{}/comment", draft.id),
        "/api/posts/9999/comment".to_string(),
        "/api/posts/abc/comment".to_string(),
    ] {
        let response = app.server.post(&path).json(&body).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    assert_eq!(app.comment_count().await, 0);
}

#[sqlx::test]
async fn test_comment_rejects_get(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .get(&format!("/api/posts/{}/comment", post.id))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header("allow"), "POST");
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "method_not_allowed"
    );
}
