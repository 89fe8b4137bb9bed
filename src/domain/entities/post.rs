//! Post entity and its publication status.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use std::fmt;

/// Publication status of a post.
///
/// Stored as a two-letter code (`DF` / `PB`) in the `posts.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    /// Database code for this status.
    pub fn as_code(self) -> &'static str {
        match self {
            PostStatus::Draft => "DF",
            PostStatus::Published => "PB",
        }
    }

    /// Parses a database code. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DF" => Some(PostStatus::Draft),
            "PB" => Some(PostStatus::Published),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A blog post.
///
/// `author` is the author's username, joined in by the repository.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub author: String,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: PostStatus,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// The `(year, month, day, slug)` key the detail page is addressed by.
    pub fn date_key(&self) -> PostDateKey {
        PostDateKey {
            year: self.publish.year(),
            month: self.publish.month(),
            day: self.publish.day(),
            slug: self.slug.clone(),
        }
    }

    /// Site-relative URL of the detail page, e.g. `/2025/3/14/hello-world/`.
    pub fn absolute_path(&self) -> String {
        self.date_key().path()
    }

    /// Body split on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// The first `max_words` words of the body, with `...` appended if cut.
    pub fn excerpt(&self, max_words: usize) -> String {
        let words: Vec<&str> = self.body.split_whitespace().collect();
        if words.len() <= max_words {
            return words.join(" ");
        }
        format!("{} ...", words[..max_words].join(" "))
    }
}

/// Input data for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub status: PostStatus,
}

/// Composite lookup key of a post detail page.
///
/// Components are kept unvalidated; [`PostDateKey::date`] returns `None` when
/// they do not form a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub slug: String,
}

impl PostDateKey {
    pub fn new(year: i32, month: u32, day: u32, slug: impl Into<String>) -> Self {
        Self {
            year,
            month,
            day,
            slug: slug.into(),
        }
    }

    /// Parses raw path segments. Returns `None` if any date part is not a number.
    pub fn parse(year: &str, month: &str, day: &str, slug: &str) -> Option<Self> {
        Some(Self::new(
            year.parse().ok()?,
            month.parse().ok()?,
            day.parse().ok()?,
            slug,
        ))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Half-open UTC interval `[start, end)` covering the key's publish day.
    pub fn day_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        day_bounds(self.date()?)
    }

    pub fn path(&self) -> String {
        format!("/{}/{}/{}/{}/", self.year, self.month, self.day, self.slug)
    }
}

/// Half-open UTC interval `[start, end)` covering `date`.
pub fn day_bounds(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
    let end = Utc.from_utc_datetime(&date.succ_opt()?.and_hms_opt(0, 0, 0)?);
    Some((start, end))
}
