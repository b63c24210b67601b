use chrono::NaiveDate;
use serde::Serialize;

/// The four headline KPIs for one (table, range, scope) selection.
///
/// `None` means "not available": missing column, empty subset, or a
/// denominator that is not positive.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct KpiSnapshot {
    pub availability: Option<f64>,
    pub mtbf: Option<f64>,
    pub mttr: Option<f64>,
    pub total_interventions: usize,

    pub total_period_hours: Option<f64>,
    pub total_downtime_hours: Option<f64>,
    pub failure_count: usize,
    pub equipment_count: usize,
}

/// One month of a time series; `month` is the first day of the month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: NaiveDate,
    pub value: f64,
}

impl MonthlyPoint {
    pub fn label(&self) -> String {
        self.month.format("%Y-%m").to_string()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeCount {
    pub maintenance_type: String,
    pub count: usize,
}

/// The four chart datasets. `None` means the backing column is missing.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SeriesSet {
    pub availability: Option<Vec<MonthlyPoint>>,
    pub maintenance_types: Option<Vec<TypeCount>>,
    pub mtbf: Option<Vec<MonthlyPoint>>,
    pub mttr: Option<Vec<MonthlyPoint>>,
}
