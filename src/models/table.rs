use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::work_order::WorkOrderRecord;
use crate::errors::{AppError, AppResult};

/// Column names recognised in the uploaded sheet.
pub mod columns {
    pub const START_DATETIME: &str = "start_datetime";
    pub const END_DATETIME: &str = "end_datetime";
    pub const DURATION_MINUTES: &str = "duration_minutes";
    /// Derived on load; present whenever `duration_minutes` is.
    pub const DURATION_HOURS: &str = "duration_hours";
    pub const AREA: &str = "area";
    pub const EQUIPMENT: &str = "equipment";
    pub const IS_FAILURE: &str = "is_failure";
    pub const MAINTENANCE_TYPE: &str = "maintenance_type";
}

/// Ordered work orders sharing the schema of the uploaded sheet.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct WorkOrderTable {
    columns: Vec<String>,
    records: Vec<WorkOrderRecord>,
}

impl WorkOrderTable {
    pub fn new(columns: Vec<String>, records: Vec<WorkOrderRecord>) -> Self {
        Self { columns, records }
    }

    /// Same schema, no rows.
    pub fn empty_like(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            records: Vec::new(),
        }
    }

    pub fn with_records(&self, records: Vec<WorkOrderRecord>) -> Self {
        Self {
            columns: self.columns.clone(),
            records,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[WorkOrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if the sheet had the column (after trimming surrounding whitespace).
    pub fn has(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.trim() == column)
    }

    /// Like `has`, but as an error. Used where the column is an input, not a KPI source.
    pub fn require(&self, column: &str) -> AppResult<()> {
        if self.has(column) {
            Ok(())
        } else {
            Err(AppError::MissingColumn(column.to_string()))
        }
    }

    /// Sorted distinct non-empty `area` values.
    pub fn distinct_areas(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(|r| r.area.as_deref()))
    }

    /// Sorted distinct non-empty `equipment` values.
    pub fn distinct_equipment(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(|r| r.equipment.as_deref()))
    }

    /// Earliest start date and latest end date found in the table.
    pub fn date_bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let min_start = self.records.iter().filter_map(|r| r.start_date()).min();
        let max_end = self.records.iter().filter_map(|r| r.end_date()).max();
        (min_start, max_end)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
