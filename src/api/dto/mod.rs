//! Data Transfer Objects for API requests and responses.
//!
//! Responses are built from the service contexts; request bodies reuse the
//! application forms so that validation stays in one place.

pub mod comment;
pub mod health;
pub mod posts;
pub mod share;
