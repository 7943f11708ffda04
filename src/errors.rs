//! Unified application error type.
//! All modules (core, export, cli, config) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Input parsing
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column in CSV header: '{0}'")]
    MissingColumn(String),

    #[error("Invalid device timestamp at row {row}: '{value}' (expected DD/MM/YYYY HH:MM)")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Invalid number in column '{column}' at row {row}: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No readings found in the dataset")]
    EmptyDataset,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Malformed summary file: {0}")]
    Summary(String),
}

pub type AppResult<T> = Result<T, AppError>;
