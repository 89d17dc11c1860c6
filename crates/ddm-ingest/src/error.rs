//! Error types for trial table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trial table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has a header but no trials.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// One or more required trial columns are absent.
    #[error("required columns missing from {path}: {}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
