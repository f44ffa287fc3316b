//! Unified application error type.
//! All modules (cli, core, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Per-field validation problems are NOT AppErrors: they travel inside a
//! ValidationReport so every leaf field can report independently. The CLI
//! converts a non-empty report into ValidationFailed once the detail has
//! been rendered, so the process still exits non-zero.

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
    // Payload errors
    // ---------------------------
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    // ---------------------------
    // Validation outcome
    // ---------------------------
    #[error("validation failed with {0} error(s)")]
    ValidationFailed(usize),

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
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
