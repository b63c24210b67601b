use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::kpi::{equipment_count, mean};
use crate::models::table::columns;
use crate::models::{MaintenanceType, MonthlyPoint, SeriesSet, TypeCount, WorkOrderRecord, WorkOrderTable};
use crate::utils::date::{hours_in_month, month_start};

/// Build the four chart datasets for an already filtered table.
pub fn compute_series(table: &WorkOrderTable) -> SeriesSet {
    SeriesSet {
        availability: monthly_availability(table),
        maintenance_types: maintenance_type_distribution(table),
        mtbf: monthly_mtbf(table),
        mttr: monthly_mttr(table),
    }
}

/// Records grouped by the month of their start timestamp, chronologically.
fn by_month<'a>(
    records: impl Iterator<Item = &'a WorkOrderRecord>,
) -> BTreeMap<NaiveDate, Vec<&'a WorkOrderRecord>> {
    let mut months: BTreeMap<NaiveDate, Vec<&WorkOrderRecord>> = BTreeMap::new();
    for r in records {
        if let Some(d) = r.start_date() {
            months.entry(month_start(d)).or_default().push(r);
        }
    }
    months
}

/// `1 - downtime / hours in month`, one point per month with records.
pub fn monthly_availability(table: &WorkOrderTable) -> Option<Vec<MonthlyPoint>> {
    if !table.has(columns::START_DATETIME) || !table.has(columns::DURATION_HOURS) {
        return None;
    }

    let points = by_month(table.records().iter())
        .into_iter()
        .map(|(month, rows)| {
            let downtime: f64 = rows.iter().filter_map(|r| r.duration_hours).sum();
            MonthlyPoint {
                month,
                value: 1.0 - downtime / hours_in_month(month),
            }
        })
        .collect();

    Some(points)
}

/// Counts of the three known maintenance categories; other values are left out.
pub fn maintenance_type_distribution(table: &WorkOrderTable) -> Option<Vec<TypeCount>> {
    if !table.has(columns::MAINTENANCE_TYPE) {
        return None;
    }

    let counts = MaintenanceType::KNOWN
        .iter()
        .map(|kind| TypeCount {
            maintenance_type: kind.mt_as_str().to_string(),
            count: table
                .records()
                .iter()
                .filter(|r| r.maintenance_type.as_ref() == Some(kind))
                .count(),
        })
        .filter(|tc| tc.count > 0)
        .collect();

    Some(counts)
}

/// `hours in month * equipment count / failures`, only for months with failures.
pub fn monthly_mtbf(table: &WorkOrderTable) -> Option<Vec<MonthlyPoint>> {
    if !table.has(columns::IS_FAILURE) {
        return None;
    }

    let equipment = equipment_count(table) as f64;
    let failures = table.records().iter().filter(|r| r.is_failure());

    let points = by_month(failures)
        .into_iter()
        .map(|(month, rows)| MonthlyPoint {
            month,
            value: hours_in_month(month) * equipment / rows.len() as f64,
        })
        .collect();

    Some(points)
}

/// Mean failure duration per month; months without a measured duration are skipped.
pub fn monthly_mttr(table: &WorkOrderTable) -> Option<Vec<MonthlyPoint>> {
    if !table.has(columns::IS_FAILURE) {
        return None;
    }

    let failures = table.records().iter().filter(|r| r.is_failure());

    let points = by_month(failures)
        .into_iter()
        .filter_map(|(month, rows)| {
            mean(rows.iter().filter_map(|r| r.duration_hours))
                .map(|value| MonthlyPoint { month, value })
        })
        .collect();

    Some(points)
}
