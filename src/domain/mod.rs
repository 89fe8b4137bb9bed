//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces and the pure rules shared by the
//! services, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`pagination`] - Page-number resolution and page slices
//! - [`similarity`] - Similar-post ranking
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Workflows are encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod pagination;
pub mod repositories;
pub mod similarity;
