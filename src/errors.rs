//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Report aggregation
    // ---------------------------
    /// A data-source read failed; the report is aborted.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Source records are inconsistent (negative duration, mismatched ids).
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Rejected before any fetch is attempted.
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid entry status: {0}")]
    InvalidStatus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// Stable label for logs and exit diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Io(_) => "io",
            AppError::Db(_) | AppError::Migration(_) => "database",
            AppError::Fetch(_) => "fetch",
            AppError::DataIntegrity(_) => "data_integrity",
            AppError::InvalidRange(_) => "invalid_range",
            AppError::InvalidTimestamp(_)
            | AppError::InvalidStatus(_)
            | AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Config(_) | AppError::ConfigLoad | AppError::ConfigSave => "config",
            AppError::Json(_) | AppError::Csv(_) => "output",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
