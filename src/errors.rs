//! Unified application error type.
//! All modules (core, cli, ui, config) return AppError to keep the error
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

    #[error("Cannot open dataset {path}: {source}")]
    DatasetOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Input closed")]
    InputClosed,

    // ---------------------------
    // Dataset-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Missing required column '{column}' in {dataset}")]
    MissingColumn { dataset: String, column: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp on line {line}: '{value}'")]
    InvalidTimestamp { line: usize, value: String },

    #[error("Invalid number in column '{column}' on line {line}: '{value}'")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
