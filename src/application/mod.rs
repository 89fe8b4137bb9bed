//! Application layer: forms and services.
//!
//! Services orchestrate repository calls, validation and side effects, and
//! hand back contexts that the API and web layers present.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Published listing, detail and similar posts
//! - [`services::comment_service::CommentService`] - Comment submission
//! - [`services::share_service::ShareService`] - E-mail recommendations
//! - [`services::authoring_service::AuthoringService`] - Content management for the admin CLI

pub mod forms;
pub mod services;
