use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::maintenance_type::MaintenanceType;

/// One maintenance event read from the work-order sheet.
///
/// Every field is optional: the sheet may lack the column, or the cell may be blank.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct WorkOrderRecord {
    pub start_datetime: Option<NaiveDateTime>,
    pub end_datetime: Option<NaiveDateTime>,
    pub duration_minutes: Option<f64>,
    pub duration_hours: Option<f64>,
    pub area: Option<String>,
    pub equipment: Option<String>,
    pub is_failure: Option<bool>,
    pub maintenance_type: Option<MaintenanceType>,
}

impl WorkOrderRecord {
    /// Set the source duration and keep `duration_hours` in sync with it.
    pub fn with_duration_minutes(mut self, minutes: Option<f64>) -> Self {
        self.duration_minutes = minutes;
        self.duration_hours = minutes.map(|m| m / 60.0);
        self
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_datetime.map(|dt| dt.date())
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_datetime.map(|dt| dt.date())
    }

    pub fn is_failure(&self) -> bool {
        self.is_failure.unwrap_or(false)
    }
}
