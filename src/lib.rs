//! Greenroom - a theater-troupe administration toolkit.
//!
//! This library provides the core functionality for the `gr` CLI tool:
//! typed directory records, the aggregation engine behind every directory
//! view (filtering, grouping, color cycling, summary statistics), and the
//! remote bridge that backs create/update/delete operations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod models;
pub mod roster;
pub mod session;
pub mod source;
pub mod store;

/// Library-level error type for Greenroom operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("{0}")]
    Backend(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} (pass --yes to confirm)")]
    ConfirmationRequired(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Greenroom operations.
pub type Result<T> = std::result::Result<T, Error>;
