//! Spreadsheet ingestion: uploaded bytes → [`WorkOrderTable`].

mod cells;
mod columns;
mod excel_date;
pub mod pipeline;

pub use pipeline::load_workbook;

use crate::errors::AppResult;
use crate::models::{Upload, WorkOrderTable};
use std::fs;
use std::path::Path;

/// Read a file from disk as an upload (file name + raw bytes).
pub fn read_upload(path: &Path) -> AppResult<Upload> {
    let bytes = fs::read(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Upload::new(filename, bytes))
}

/// Decode an upload. Called afresh on every interaction.
pub fn parse_upload(upload: &Upload) -> AppResult<WorkOrderTable> {
    load_workbook(&upload.bytes, &upload.filename)
}
