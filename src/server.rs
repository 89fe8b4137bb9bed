//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, mail backend selection and the
//! Axum server lifecycle.

use crate::application::services::{CommentService, PostService, ShareService};
use crate::config::{Config, MAIL_BACKEND_HTTP};
use crate::infrastructure::mail::{ConsoleMailer, HttpMailer, Mailer};
use crate::infrastructure::persistence::{
    PgCommentRepository, PgPostRepository, PgTagRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Mail backend (console or HTTP API)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Mail backend cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let mailer = build_mailer(&config)?;
    tracing::info!(backend = mailer.backend_name(), "Mail backend ready");

    let state = build_state(Arc::new(pool), mailer, &config);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the connection pool from the `DB_*` pool settings.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>> {
    if config.mail_backend != MAIL_BACKEND_HTTP {
        return Ok(Arc::new(ConsoleMailer::new()));
    }

    let endpoint = config
        .mail_api_url
        .as_deref()
        .context("MAIL_API_URL must be set when MAIL_BACKEND=http")?;
    let endpoint = Url::parse(endpoint).context("MAIL_API_URL is not a valid URL")?;
    let api_key = config
        .mail_api_key
        .clone()
        .context("MAIL_API_KEY must be set when MAIL_BACKEND=http")?;

    let mailer = HttpMailer::new(endpoint, api_key).context("Failed to build HTTP mailer")?;
    Ok(Arc::new(mailer))
}

/// Wires PostgreSQL repositories and the mailer into the application services.
pub fn build_state(pool: Arc<PgPool>, mailer: Arc<dyn Mailer>, config: &Config) -> AppState {
    let posts = Arc::new(PgPostRepository::new(pool.clone()));
    let tags = Arc::new(PgTagRepository::new(pool.clone()));
    let comments = Arc::new(PgCommentRepository::new(pool));

    AppState {
        post_service: Arc::new(PostService::new(
            posts.clone(),
            tags,
            comments.clone(),
        )),
        comment_service: Arc::new(CommentService::new(posts.clone(), comments)),
        share_service: Arc::new(ShareService::new(posts, mailer, config.mail_from.clone())),
        site_url: config.site_url.clone(),
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
