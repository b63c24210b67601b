// src/ingest/pipeline.rs

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};

use super::cells::{
    cell_to_bool, cell_to_datetime, cell_to_f64, cell_to_maintenance_type, cell_to_text, is_blank,
};
use super::columns::ColumnMap;
use crate::errors::{AppError, AppResult};
use crate::models::WorkOrderRecord;
use crate::models::table::{WorkOrderTable, columns};

static EMPTY_CELL: Data = Data::Empty;

/// Decode an uploaded workbook into a [`WorkOrderTable`].
///
/// Only `.xlsx` is accepted. The first worksheet is read, its first row is the
/// header. Timestamp columns are normalised and `duration_hours` is derived
/// from `duration_minutes` when present.
pub fn load_workbook(bytes: &[u8], filename: &str) -> AppResult<WorkOrderTable> {
    if !is_xlsx(filename) {
        return Err(AppError::UnsupportedFormat(filename.to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::ParseFailure("the workbook has no worksheets".into()))??;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| AppError::ParseFailure("the first worksheet is empty".into()))?;

    let col_map = ColumnMap::from_header_row(header);

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        if row.iter().all(is_blank) {
            continue;
        }
        // +2: one for the header, one for 1-based sheet rows
        records.push(row_to_record(&col_map, row, idx + 2)?);
    }

    let mut column_names = col_map.all_headers().to_vec();
    if col_map.has(columns::DURATION_MINUTES) && !col_map.has(columns::DURATION_HOURS) {
        column_names.push(columns::DURATION_HOURS.to_string());
    }

    Ok(WorkOrderTable::new(column_names, records))
}

fn is_xlsx(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false)
}

fn row_to_record(col_map: &ColumnMap, row: &[Data], line: usize) -> AppResult<WorkOrderRecord> {
    let fail = |col: &str, msg: String| AppError::ParseFailure(format!("row {line}, column '{col}': {msg}"));

    let cell = |col: &str| col_map.get(row, col).unwrap_or(&EMPTY_CELL);

    let start_datetime = cell_to_datetime(cell(columns::START_DATETIME))
        .map_err(|m| fail(columns::START_DATETIME, m))?;
    let end_datetime = cell_to_datetime(cell(columns::END_DATETIME))
        .map_err(|m| fail(columns::END_DATETIME, m))?;
    let duration_minutes = cell_to_f64(cell(columns::DURATION_MINUTES))
        .map_err(|m| fail(columns::DURATION_MINUTES, m))?;
    let is_failure =
        cell_to_bool(cell(columns::IS_FAILURE)).map_err(|m| fail(columns::IS_FAILURE, m))?;

    let record = WorkOrderRecord {
        start_datetime,
        end_datetime,
        area: cell_to_text(cell(columns::AREA)),
        equipment: cell_to_text(cell(columns::EQUIPMENT)),
        is_failure,
        maintenance_type: cell_to_maintenance_type(cell(columns::MAINTENANCE_TYPE)),
        ..Default::default()
    };

    Ok(record.with_duration_minutes(duration_minutes))
}
