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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Malformed time value: {0}")]
    MalformedTime(String),

    // ---------------------------
    // Entry validation errors
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Invalid time format: {0} (expected HH:MM AM/PM)")]
    InvalidTimeFormat(String),

    #[error("Completed count must be greater than zero")]
    NonPositiveCompleted,

    #[error("Completed count {completed} cannot exceed total allotment {total}")]
    CompletedExceedsTotal { completed: i64, total: i64 },

    #[error("Tally count must be zero or positive")]
    NegativeCount,

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry found with id {0}")]
    EntryNotFound(i64),

    #[error("Authentication failed: invalid username or password")]
    AuthFailed,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
