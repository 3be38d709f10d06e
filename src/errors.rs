//! Unified application error type.
//! All modules (roster, form, attachment, submit, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use crate::models::field::Field;
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
    // Roster
    // ---------------------------
    #[error("Failed to load roster '{path}': {reason}")]
    RosterLoad { path: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid reason: {0}")]
    InvalidReason(String),

    #[error("Invalid illness type: {0}")]
    InvalidIllness(String),

    // ---------------------------
    // Form errors
    // ---------------------------
    #[error("{field}: {message}")]
    Validation { field: Field, message: String },

    #[error("Attachment error: {0}")]
    Attachment(String),

    #[error("A submission is already in progress")]
    Busy,

    // ---------------------------
    // Submission errors
    // ---------------------------
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
