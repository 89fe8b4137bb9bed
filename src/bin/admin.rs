//! CLI administration tool for the blog.
//!
//! Provides commands for managing authors, posts and tags, viewing
//! statistics, and performing database operations.
//!
//! # Usage
//!
//! ```bash
//! # Register an author
//! cargo run --bin admin -- author create admin
//!
//! # Write a post (prompts for missing fields)
//! cargo run --bin admin -- post create --title "Hello" --author admin
//!
//! # Publish and tag it
//! cargo run --bin admin -- post publish 1
//! cargo run --bin admin -- post tag 1 rust web
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use blog::application::services::{AuthoringService, PostDraft};
use blog::domain::entities::{Post, PostStatus};
use blog::infrastructure::persistence::{PgAuthorRepository, PgPostRepository, PgTagRepository};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the blog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage authors
    Author {
        #[command(subcommand)]
        action: AuthorAction,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum AuthorAction {
    /// Register a new author
    Create {
        /// Unique username
        username: String,
    },
}

#[derive(Subcommand)]
enum PostAction {
    /// Create a post
    Create {
        #[arg(short, long)]
        title: Option<String>,

        /// Slug (derived from the title if omitted)
        #[arg(short, long)]
        slug: Option<String>,

        /// Author username
        #[arg(short, long)]
        author: Option<String>,

        #[arg(short, long)]
        body: Option<String>,

        /// Publish time, RFC 3339 or `YYYY-MM-DD HH:MM` (UTC); defaults to now
        #[arg(short, long)]
        publish: Option<String>,

        /// Create the post as published instead of draft
        #[arg(long)]
        published: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Publish a draft
    Publish {
        id: i64,
    },

    /// List posts of any status
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Attach tags to a post
    Tag {
        id: i64,

        /// Tag labels, e.g. `rust "web dev"`
        #[arg(required = true)]
        tags: Vec<String>,
    },
}

#[derive(Subcommand)]
enum TagAction {
    /// List all tags
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Author { action } => handle_author_action(action, &pool).await?,
        Commands::Post { action } => handle_post_action(action, &pool).await?,
        Commands::Tag { action } => handle_tag_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn authoring_service(pool: &PgPool) -> AuthoringService {
    let pool = Arc::new(pool.clone());
    AuthoringService::new(
        Arc::new(PgPostRepository::new(pool.clone())),
        Arc::new(PgTagRepository::new(pool.clone())),
        Arc::new(PgAuthorRepository::new(pool)),
    )
}

async fn handle_author_action(action: AuthorAction, pool: &PgPool) -> Result<()> {
    let service = authoring_service(pool);

    match action {
        AuthorAction::Create { username } => {
            let author = service
                .create_author(&username)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create author: {}", e))?;

            println!(
                "{} Author {} created (id {})",
                "✔".green().bold(),
                author.username.cyan(),
                author.id.to_string().bright_black()
            );
        }
    }

    Ok(())
}

/// Dispatches post management commands.
async fn handle_post_action(action: PostAction, pool: &PgPool) -> Result<()> {
    let service = authoring_service(pool);

    match action {
        PostAction::Create {
            title,
            slug,
            author,
            body,
            publish,
            published,
            yes,
        } => {
            create_post(&service, title, slug, author, body, publish, published, yes).await?;
        }
        PostAction::Publish { id } => {
            let post = service
                .publish(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to publish post: {}", e))?;

            println!(
                "{} Published {} at {}",
                "✔".green().bold(),
                post.title.cyan(),
                post.absolute_path().bright_white()
            );
        }
        PostAction::List { limit } => {
            let posts = service
                .list_posts(limit)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list posts: {}", e))?;
            print_posts(&posts);
        }
        PostAction::Tag { id, tags } => {
            let attached = service
                .tag_post(id, &tags)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to tag post: {}", e))?;

            let slugs: Vec<&str> = attached.iter().map(|t| t.slug.as_str()).collect();
            println!(
                "{} Post {} tagged: {}",
                "✔".green().bold(),
                id.to_string().bright_black(),
                slugs.join(", ").cyan()
            );
        }
    }

    Ok(())
}

/// Creates a post with interactive prompts for missing fields.
#[allow(clippy::too_many_arguments)]
async fn create_post(
    service: &AuthoringService,
    title: Option<String>,
    slug: Option<String>,
    author: Option<String>,
    body: Option<String>,
    publish: Option<String>,
    published: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "New post".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };
    let author = match author {
        Some(a) => a,
        None => Input::new().with_prompt("Author username").interact_text()?,
    };
    let body = match body {
        Some(b) => b,
        None => Input::new().with_prompt("Body").interact_text()?,
    };
    let publish = publish.as_deref().map(parse_publish).transpose()?;
    let status = if published {
        PostStatus::Published
    } else {
        PostStatus::Draft
    };

    println!();
    println!("  Title:   {}", title.cyan());
    println!(
        "  Slug:    {}",
        slug.as_deref().unwrap_or("(from title)").bright_white()
    );
    println!("  Author:  {}", author.cyan());
    println!("  Status:  {}", status.label().bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this post?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let post = service
        .create_post(PostDraft {
            title,
            slug,
            author,
            body,
            publish,
            status,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create post: {}", e))?;

    println!(
        "{} Post {} created ({})",
        "✔".green().bold(),
        post.id.to_string().bright_white().bold(),
        post.absolute_path().bright_black()
    );

    Ok(())
}

/// Parses `--publish` as RFC 3339 or `YYYY-MM-DD HH:MM` in UTC.
fn parse_publish(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .with_context(|| format!("Invalid publish time: '{}'", raw))?;
    Ok(naive.and_utc())
}

/// Prints posts as a table.
///
/// ```text
///   ID    Status      Published          Path
///   ─────────────────────────────────────────────────────────────
///   3     Published   2025-03-14 09:00   /2025/3/14/hello-world/
/// ```
fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        return;
    }

    println!(
        "  {:<5} {:<11} {:<18} {}",
        "ID".bright_white().bold(),
        "Status".bright_white().bold(),
        "Published".bright_white().bold(),
        "Path".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for post in posts {
        let status = match post.status {
            PostStatus::Published => post.status.label().green(),
            PostStatus::Draft => post.status.label().yellow(),
        };

        println!(
            "  {:<5} {:<11} {:<18} {}",
            post.id.to_string().bright_black(),
            status,
            post.publish.format("%Y-%m-%d %H:%M").to_string(),
            post.absolute_path().cyan()
        );
    }

    println!();
    println!("  Total: {}", posts.len().to_string().bright_white().bold());
}

async fn handle_tag_action(action: TagAction, pool: &PgPool) -> Result<()> {
    let service = authoring_service(pool);

    match action {
        TagAction::List => {
            let tags = service
                .list_tags()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list tags: {}", e))?;

            if tags.is_empty() {
                println!("{}", "  No tags found".yellow());
                return Ok(());
            }

            for tag in &tags {
                println!("  {:<30} {}", tag.slug.cyan(), tag.name);
            }
        }
    }

    Ok(())
}

/// Displays content statistics.
///
/// Shows:
/// - Published and draft post counts
/// - Active comment count
/// - Tag count
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let published: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'PB'")
        .fetch_one(pool)
        .await?;

    let drafts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'DF'")
        .fetch_one(pool)
        .await?;

    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE active")
        .fetch_one(pool)
        .await?;

    let tags: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
        .fetch_one(pool)
        .await?;

    println!(
        "  Published posts: {}",
        published.to_string().bright_green().bold()
    );
    println!("  Drafts:          {}", drafts.to_string().yellow().bold());
    println!(
        "  Active comments: {}",
        comments.to_string().bright_green().bold()
    );
    println!("  Tags:            {}", tags.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
