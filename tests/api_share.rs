mod common;

use axum::http::StatusCode;
use common::{MAIL_FROM, TestApp};
use serde_json::{Value, json};
use sqlx::PgPool;

fn valid_form() -> Value {
    json!({
        "name": "Ann",
        "email": "ann@example.com",
        "to": "bob@example.com",
        "comments": "Worth reading"
    })
}

#[sqlx::test]
async fn test_share_form_is_empty(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app.server.get(&format!("/api/posts/{}/share", post.id)).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["sent"], false);
    assert_eq!(json["post"]["url"], "/2025/3/2/hello-world/");
    assert_eq!(json["form"]["name"], "");
    assert_eq!(json["errors"], json!({}));
}

#[sqlx::test]
async fn test_share_sends_one_mail(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/share", post.id))
        .json(&valid_form())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["sent"], true);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    let mail = &sent[0];
    assert_eq!(mail.from, MAIL_FROM);
    assert_eq!(mail.to, vec!["bob@example.com".to_string()]);
    assert_eq!(mail.reply_to.as_deref(), Some("ann@example.com"));
    assert_eq!(mail.subject, "Ann recommends you read Hello World");
    assert!(
        mail.body
            .contains("Read Hello World at http://blog.test/2025/3/2/hello-world/")
    );
    assert!(mail.body.contains("Ann's comments: Worth reading"));
}

#[sqlx::test]
async fn test_share_comments_are_optional(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/share", post.id))
        .json(&json!({
            "name": "Ann",
            "email": "ann@example.com",
            "to": "bob@example.com"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(app.mailer.sent().len(), 1);
}

#[sqlx::test]
async fn test_share_field_errors_send_nothing(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/share", post.id))
        .json(&json!({
            "name": "A name that is far too long to fit",
            "email": "ann@example.com",
            "to": "bob"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["sent"], false);
    assert_eq!(
        json["errors"]["name"][0],
        "Ensure this value has at most 25 characters."
    );
    assert_eq!(json["errors"]["to"][0], "Enter a valid email address.");
    assert!(json["errors"].get("email").is_none());
    assert!(app.mailer.sent().is_empty());
}

#[sqlx::test]
async fn test_share_malformed_json_is_bad_request(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/share", post.id))
        .text("name=Ann")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    assert!(app.mailer.sent().is_empty());
}

#[sqlx::test]
async fn test_share_mail_failure_is_bad_gateway(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let post = app.published_post("Hello World", 2).await;
    app.mailer.fail();

    let response = app
        .server
        .post(&format!("/api/posts/{}/share", post.id))
        .json(&valid_form())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"]["code"], "send_failed");
}

#[sqlx::test]
async fn test_share_unpublished_post_is_not_found(pool: PgPool) {
    let app = TestApp::new(pool).await;
    let draft = app.draft_post("Draft", 2).await;

    let form = app.server.get(&format!("/api/posts/{}/share", draft.id)).await;
    form.assert_status(StatusCode::NOT_FOUND);

    let submit = app
        .server
        .post(&format!("/api/posts/{}/share", draft.id))
        .json(&valid_form())
        .await;
    submit.assert_status(StatusCode::NOT_FOUND);

    assert!(app.mailer.sent().is_empty());
}
