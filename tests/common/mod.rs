#![allow(dead_code)]

pub mod mailer;

use std::sync::Arc;

use axum_test::TestServer;
use blog::application::services::{
    AuthoringService, CommentService, PostDraft, PostService, ShareService,
};
use blog::domain::entities::{Post, PostStatus};
use blog::infrastructure::persistence::{
    PgAuthorRepository, PgCommentRepository, PgPostRepository, PgTagRepository,
};
use blog::routes::build_router;
use blog::state::AppState;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;
use url::Url;

pub use mailer::RecordingMailer;

pub const SITE_URL: &str = "http://blog.test/";
pub const MAIL_FROM: &str = "blog@example.com";
pub const AUTHOR: &str = "admin";

/// Publish time of seeded posts: 9:00 UTC on the given day of March 2025.
pub fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap()
}

/// Builds application state on top of the PostgreSQL repositories.
pub fn create_test_state(pool: Arc<PgPool>, mailer: Arc<RecordingMailer>) -> AppState {
    let posts = Arc::new(PgPostRepository::new(pool.clone()));
    let tags = Arc::new(PgTagRepository::new(pool.clone()));
    let comments = Arc::new(PgCommentRepository::new(pool));

    AppState {
        post_service: Arc::new(PostService::new(posts.clone(), tags, comments.clone())),
        comment_service: Arc::new(CommentService::new(posts.clone(), comments)),
        share_service: Arc::new(ShareService::new(posts, mailer, MAIL_FROM)),
        site_url: Some(Url::parse(SITE_URL).unwrap()),
    }
}

/// A test server with direct access to its database and mailer.
pub struct TestApp {
    pub server: TestServer,
    pub pool: Arc<PgPool>,
    pub mailer: Arc<RecordingMailer>,
    pub authoring: AuthoringService,
}

impl TestApp {
    /// Creates an app with one author, [`AUTHOR`], and no posts.
    pub async fn new(pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        let mailer = Arc::new(RecordingMailer::new());

        let state = create_test_state(pool.clone(), mailer.clone());
        let server = TestServer::new(build_router(state)).unwrap();

        let authoring = AuthoringService::new(
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgTagRepository::new(pool.clone())),
            Arc::new(PgAuthorRepository::new(pool.clone())),
        );
        authoring.create_author(AUTHOR).await.unwrap();

        Self {
            server,
            pool,
            mailer,
            authoring,
        }
    }

    /// Creates a post published at [`march`]`(day)`.
    pub async fn published_post(&self, title: &str, day: u32) -> Post {
        self.post(title, day, PostStatus::Published).await
    }

    pub async fn draft_post(&self, title: &str, day: u32) -> Post {
        self.post(title, day, PostStatus::Draft).await
    }

    async fn post(&self, title: &str, day: u32, status: PostStatus) -> Post {
        self.authoring
            .create_post(PostDraft {
                title: title.to_string(),
                slug: None,
                author: AUTHOR.to_string(),
                body: format!("{title} body.\n\nSecond paragraph."),
                publish: Some(march(day)),
                status,
            })
            .await
            .unwrap()
    }

    pub async fn tag(&self, post: &Post, labels: &[&str]) {
        let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        self.authoring.tag_post(post.id, &labels).await.unwrap();
    }

    /// Stores a comment directly, bypassing form validation.
    pub async fn insert_comment(&self, post_id: i64, name: &str, body: &str, active: bool) {
        sqlx::query(
            "INSERT INTO comments (post_id, name, email, body, active) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(post_id)
        .bind(name)
        .bind(format!("{}@example.com", name.to_lowercase()))
        .bind(body)
        .bind(active)
        .execute(self.pool.as_ref())
        .await
        .unwrap();
    }

    pub async fn comment_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(self.pool.as_ref())
            .await
            .unwrap()
    }
}

/// Detail path of `post` as routed without trailing-slash normalization.
pub fn detail_path(post: &Post) -> String {
    post.absolute_path().trim_end_matches('/').to_string()
}
