//! Server-rendered HTML pages of the blog.
//!
//! Uses Askama templates from `templates/` for rendering.
//!
//! # Modules
//!
//! - [`error`] - HTML error pages
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod error;
pub mod handlers;
pub mod routes;
