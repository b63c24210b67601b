//! Unified application error type.
//! All modules (ingest, core, export, cli) return AppError so that every
//! failure can be turned into a short user-facing message at the boundary.

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
    // Ingestion
    // ---------------------------
    #[error("Unsupported format. Please upload an Excel file (.xlsx). Got: {0}")]
    UnsupportedFormat(String),

    #[error("Error processing the file: {0}")]
    ParseFailure(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    // ---------------------------
    // Filtering / aggregation
    // ---------------------------
    #[error("No work orders match the selected filters")]
    EmptyResult,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<calamine::XlsxError> for AppError {
    fn from(e: calamine::XlsxError) -> Self {
        AppError::ParseFailure(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
