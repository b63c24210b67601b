use std::collections::HashSet;

use crate::models::table::columns;
use crate::models::{DateRange, KpiSnapshot, WorkOrderTable};

/// Compute the headline KPIs for an already filtered table.
pub fn compute_kpis(table: &WorkOrderTable, range: &DateRange) -> KpiSnapshot {
    let total_period_hours = total_period_hours(table, range);
    let total_downtime_hours = total_downtime_hours(table);

    let availability = match (total_period_hours, total_downtime_hours) {
        (Some(period), Some(downtime)) if period > 0.0 => Some(1.0 - downtime / period),
        _ => None,
    };

    let failure_count = failure_count(table);
    let equipment_count = equipment_count(table);

    let mtbf = match total_period_hours {
        Some(period) if failure_count > 0 => {
            Some(period * equipment_count as f64 / failure_count as f64)
        }
        _ => None,
    };

    KpiSnapshot {
        availability,
        mtbf,
        mttr: mttr(table),
        total_interventions: table.len(),
        total_period_hours,
        total_downtime_hours,
        failure_count,
        equipment_count,
    }
}

/// Hours covered by the analysis.
///
/// With both bounds selected this is `whole days * 24`. When that is not
/// positive (or a bound is missing) it falls back to the span between the
/// earliest start and the latest end of the filtered records.
pub fn total_period_hours(table: &WorkOrderTable, range: &DateRange) -> Option<f64> {
    let selected = range.span_days().map(|d| (d * 24) as f64).unwrap_or(0.0);

    if selected <= 0.0 {
        records_span_hours(table)
    } else {
        Some(selected)
    }
}

fn records_span_hours(table: &WorkOrderTable) -> Option<f64> {
    let min_start = table.records().iter().filter_map(|r| r.start_datetime).min()?;
    let max_end = table.records().iter().filter_map(|r| r.end_datetime).max()?;
    Some((max_end - min_start).num_seconds() as f64 / 3600.0)
}

/// Sum of `duration_hours`; `None` when the sheet had no duration column.
pub fn total_downtime_hours(table: &WorkOrderTable) -> Option<f64> {
    if !table.has(columns::DURATION_HOURS) {
        return None;
    }
    Some(table.records().iter().filter_map(|r| r.duration_hours).sum())
}

pub fn failure_count(table: &WorkOrderTable) -> usize {
    if !table.has(columns::IS_FAILURE) {
        return 0;
    }
    table.records().iter().filter(|r| r.is_failure()).count()
}

/// Distinct equipment ids, never less than 1.
pub fn equipment_count(table: &WorkOrderTable) -> usize {
    let distinct: HashSet<&str> = table
        .records()
        .iter()
        .filter_map(|r| r.equipment.as_deref())
        .collect();
    distinct.len().max(1)
}

/// Mean repair hours over failure records.
pub fn mttr(table: &WorkOrderTable) -> Option<f64> {
    if !table.has(columns::IS_FAILURE) {
        return None;
    }
    mean(
        table
            .records()
            .iter()
            .filter(|r| r.is_failure())
            .filter_map(|r| r.duration_hours),
    )
}

pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}
