//! Helper functions used across the application.
//!
//! - [`absolute_url`] - Public base URL resolution and absolute link building
//! - [`path_params`] - Post id and date segments parsing
//! - [`slug`] - Slug generation and validation

pub mod absolute_url;
pub mod path_params;
pub mod slug;
