//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain and application
//! layers, providing concrete implementations for data persistence and mail
//! delivery.
//!
//! # Modules
//!
//! - [`mail`] - Outgoing mail backends (console and HTTP API)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod mail;
pub mod persistence;
