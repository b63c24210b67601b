mod common;
use chrono::{NaiveDate, NaiveDateTime};
use common::{april_table, approx};
use rmaintkpi::core::kpi::{equipment_count, failure_count, total_downtime_hours, total_period_hours};
use rmaintkpi::core::series::{maintenance_type_distribution, monthly_availability};
use rmaintkpi::core::{compute_kpis, compute_series, filter};
use rmaintkpi::models::table::columns;
use rmaintkpi::models::{DateRange, MaintenanceType, ScopeSelector, WorkOrderRecord, WorkOrderTable};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

fn april() -> DateRange {
    DateRange::new(Some(day(2024, 4, 1)), Some(day(2024, 5, 1)))
}

fn all_columns() -> Vec<String> {
    [
        columns::START_DATETIME,
        columns::END_DATETIME,
        columns::DURATION_MINUTES,
        columns::DURATION_HOURS,
        columns::AREA,
        columns::EQUIPMENT,
        columns::IS_FAILURE,
        columns::MAINTENANCE_TYPE,
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn record(start: NaiveDateTime, minutes: f64, equipment: &str, failure: bool) -> WorkOrderRecord {
    WorkOrderRecord {
        start_datetime: Some(start),
        end_datetime: Some(start + chrono::Duration::minutes(minutes as i64)),
        area: Some("Line A".to_string()),
        equipment: Some(equipment.to_string()),
        is_failure: Some(failure),
        maintenance_type: Some(MaintenanceType::Correctivo),
        ..Default::default()
    }
    .with_duration_minutes(Some(minutes))
}

// ---------------------------
// filter
// ---------------------------

#[test]
fn test_filter_without_table_is_empty() {
    let out = filter(None, &DateRange::unbounded(), &ScopeSelector::All);
    assert!(out.is_empty());
}

#[test]
fn test_filter_unbounded_keeps_everything() {
    let table = april_table();
    let out = filter(Some(&table), &DateRange::unbounded(), &ScopeSelector::All);
    assert_eq!(out.len(), 3);
    assert_eq!(out.columns(), table.columns());
}

#[test]
fn test_filter_start_bound_uses_start_date() {
    let table = april_table();
    let range = DateRange::new(Some(day(2024, 4, 10)), None);
    let out = filter(Some(&table), &range, &ScopeSelector::All);
    assert_eq!(out.len(), 2);
}

#[test]
fn test_filter_end_bound_is_inclusive_on_end_date() {
    let table = april_table();
    let range = DateRange::new(None, Some(day(2024, 4, 10)));
    let out = filter(Some(&table), &range, &ScopeSelector::All);
    assert_eq!(out.len(), 2);
}

#[test]
fn test_filter_by_area_and_equipment() {
    let table = april_table();

    let packing = filter(
        Some(&table),
        &DateRange::unbounded(),
        &ScopeSelector::Area("Packing".to_string()),
    );
    assert_eq!(packing.len(), 2);

    let pk01 = filter(
        Some(&table),
        &DateRange::unbounded(),
        &ScopeSelector::Equipment("PK-01".to_string()),
    );
    assert_eq!(pk01.len(), 2);
    assert!(pk01.records().iter().all(|r| r.equipment.as_deref() == Some("PK-01")));
}

#[test]
fn test_filter_unknown_scope_keeps_schema() {
    let table = april_table();
    let out = filter(
        Some(&table),
        &DateRange::unbounded(),
        &ScopeSelector::Area("Nowhere".to_string()),
    );
    assert!(out.is_empty());
    assert!(out.has(columns::DURATION_HOURS));
}

#[test]
fn test_filter_result_is_subset_in_original_order() {
    let table = april_table();
    let range = DateRange::new(Some(day(2024, 4, 5)), Some(day(2024, 4, 30)));
    let out = filter(Some(&table), &range, &ScopeSelector::All);

    assert_eq!(out.records(), &table.records()[1..]);
}

#[test]
fn test_filter_is_idempotent() {
    let table = april_table();
    let range = DateRange::new(Some(day(2024, 4, 1)), Some(day(2024, 4, 15)));
    let scope = ScopeSelector::Equipment("PK-01".to_string());

    let once = filter(Some(&table), &range, &scope);
    let twice = filter(Some(&once), &range, &scope);

    assert_eq!(once.len(), 1);
    assert_eq!(twice, once);
}

// ---------------------------
// KPIs
// ---------------------------

#[test]
fn test_availability_over_selected_month() {
    let snap = compute_kpis(&april_table(), &april());

    assert_eq!(snap.total_period_hours, Some(720.0));
    assert!(approx(snap.total_downtime_hours.unwrap(), 6.0));
    assert!(approx(snap.availability.unwrap(), 1.0 - 6.0 / 720.0));
}

#[test]
fn test_mttr_is_mean_of_failure_durations() {
    let snap = compute_kpis(&april_table(), &april());
    // failures take 1h and 3h
    assert!(approx(snap.mttr.unwrap(), 2.0));
    assert_eq!(snap.failure_count, 2);
}

#[test]
fn test_mtbf_scales_with_equipment_count() {
    let snap = compute_kpis(&april_table(), &april());
    assert_eq!(snap.equipment_count, 2);
    assert!(approx(snap.mtbf.unwrap(), 720.0 * 2.0 / 2.0));
}

#[test]
fn test_mttr_three_records() {
    let start = at(2024, 6, 1, 8);
    let table = WorkOrderTable::new(
        all_columns(),
        vec![
            record(start, 120.0, "E1", true),
            record(start, 300.0, "E1", false),
            record(start, 240.0, "E1", true),
        ],
    );

    let snap = compute_kpis(&table, &DateRange::unbounded());
    assert!(approx(snap.mttr.unwrap(), 3.0));
    assert_eq!(snap.total_interventions, 3);
}

#[test]
fn test_period_falls_back_to_record_span() {
    let table = WorkOrderTable::new(
        all_columns(),
        vec![
            record(at(2024, 6, 1, 0), 60.0, "E1", true),
            record(at(2024, 6, 3, 23), 60.0, "E1", false),
        ],
    );

    // no range
    assert_eq!(total_period_hours(&table, &DateRange::unbounded()), Some(72.0));

    // zero-length range also falls back
    let same_day = DateRange::new(Some(day(2024, 6, 1)), Some(day(2024, 6, 1)));
    assert_eq!(total_period_hours(&table, &same_day), Some(72.0));

    // inverted range is not positive either
    let inverted = DateRange::new(Some(day(2024, 6, 3)), Some(day(2024, 6, 1)));
    assert_eq!(total_period_hours(&table, &inverted), Some(72.0));
}

#[test]
fn test_period_unknown_without_timestamps() {
    let table = WorkOrderTable::new(
        all_columns(),
        vec![WorkOrderRecord::default().with_duration_minutes(Some(30.0))],
    );

    let snap = compute_kpis(&table, &DateRange::unbounded());
    assert_eq!(snap.total_period_hours, None);
    assert_eq!(snap.availability, None);
    assert_eq!(snap.mtbf, None);
}

#[test]
fn test_missing_duration_column_leaves_availability_undefined() {
    let cols: Vec<String> = all_columns()
        .into_iter()
        .filter(|c| c != columns::DURATION_MINUTES && c != columns::DURATION_HOURS)
        .collect();
    let rec = WorkOrderRecord {
        duration_minutes: None,
        duration_hours: None,
        ..record(at(2024, 6, 1, 8), 60.0, "E1", true)
    };
    let table = WorkOrderTable::new(cols, vec![rec]);

    assert_eq!(total_downtime_hours(&table), None);
    let snap = compute_kpis(&table, &april());
    assert_eq!(snap.availability, None);
    assert_eq!(snap.mttr, None);
    assert!(snap.mtbf.is_some());
}

#[test]
fn test_missing_failure_column_disables_mtbf_and_mttr() {
    let cols: Vec<String> = all_columns()
        .into_iter()
        .filter(|c| c != columns::IS_FAILURE)
        .collect();
    let rec = WorkOrderRecord {
        is_failure: None,
        ..record(at(2024, 4, 2, 8), 60.0, "E1", false)
    };
    let table = WorkOrderTable::new(cols, vec![rec]);

    let snap = compute_kpis(&table, &april());
    assert_eq!(failure_count(&table), 0);
    assert_eq!(snap.mtbf, None);
    assert_eq!(snap.mttr, None);
    assert!(snap.availability.is_some());
}

#[test]
fn test_no_failures_means_no_mtbf() {
    let table = WorkOrderTable::new(
        all_columns(),
        vec![record(at(2024, 4, 2, 8), 60.0, "E1", false)],
    );
    let snap = compute_kpis(&table, &april());
    assert_eq!(snap.mtbf, None);
    assert_eq!(snap.mttr, None);
}

#[test]
fn test_equipment_count_never_below_one() {
    let rec = WorkOrderRecord {
        equipment: None,
        ..record(at(2024, 4, 2, 8), 60.0, "E1", true)
    };
    let table = WorkOrderTable::new(all_columns(), vec![rec]);
    assert_eq!(equipment_count(&table), 1);
}

#[test]
fn test_availability_can_go_negative() {
    // 48h of downtime inside a one-day window
    let table = WorkOrderTable::new(
        all_columns(),
        vec![record(at(2024, 4, 2, 0), 48.0 * 60.0, "E1", true)],
    );
    let range = DateRange::new(Some(day(2024, 4, 2)), Some(day(2024, 4, 3)));
    let snap = compute_kpis(&table, &range);
    assert!(approx(snap.availability.unwrap(), 1.0 - 48.0 / 24.0));
}

// ---------------------------
// series
// ---------------------------

#[test]
fn test_monthly_series_for_single_month() {
    let series = compute_series(&april_table());

    let avail = series.availability.unwrap();
    assert_eq!(avail.len(), 1);
    assert_eq!(avail[0].label(), "2024-04");
    assert!(approx(avail[0].value, 1.0 - 6.0 / 720.0));

    let mtbf = series.mtbf.unwrap();
    assert_eq!(mtbf.len(), 1);
    assert!(approx(mtbf[0].value, 720.0));

    let mttr = series.mttr.unwrap();
    assert!(approx(mttr[0].value, 2.0));
}

#[test]
fn test_monthly_availability_is_chronological() {
    let table = WorkOrderTable::new(
        all_columns(),
        vec![
            record(at(2024, 3, 5, 8), 60.0, "E1", false),
            record(at(2024, 2, 5, 8), 120.0, "E1", false),
            record(at(2024, 3, 9, 8), 60.0, "E1", false),
        ],
    );

    let avail = monthly_availability(&table).unwrap();
    let labels: Vec<String> = avail.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["2024-02", "2024-03"]);

    // February 2024 has 29 days
    assert!(approx(avail[0].value, 1.0 - 2.0 / (29.0 * 24.0)));
    assert!(approx(avail[1].value, 1.0 - 2.0 / (31.0 * 24.0)));
}

#[test]
fn test_monthly_mtbf_skips_months_without_failures() {
    let table = WorkOrderTable::new(
        all_columns(),
        vec![
            record(at(2024, 5, 5, 8), 60.0, "E1", false),
            record(at(2024, 6, 5, 8), 60.0, "E1", true),
            record(at(2024, 6, 7, 8), 60.0, "E2", true),
        ],
    );

    let mtbf = compute_series(&table).mtbf.unwrap();
    assert_eq!(mtbf.len(), 1);
    assert_eq!(mtbf[0].label(), "2024-06");
    assert!(approx(mtbf[0].value, 720.0 * 2.0 / 2.0));
}

#[test]
fn test_type_distribution_drops_unknown_categories() {
    let mut records = vec![
        record(at(2024, 4, 2, 8), 60.0, "E1", true),
        record(at(2024, 4, 3, 8), 60.0, "E1", false),
        record(at(2024, 4, 4, 8), 60.0, "E1", false),
    ];
    records[1].maintenance_type = Some(MaintenanceType::Predictivo);
    records[2].maintenance_type = Some(MaintenanceType::Other("Inspección".to_string()));

    let table = WorkOrderTable::new(all_columns(), records);
    let dist = maintenance_type_distribution(&table).unwrap();

    let pairs: Vec<(&str, usize)> = dist
        .iter()
        .map(|t| (t.maintenance_type.as_str(), t.count))
        .collect();
    assert_eq!(pairs, vec![("Correctivo", 1), ("Predictivo", 1)]);
}

#[test]
fn test_series_unavailable_without_columns() {
    let cols = vec![
        columns::START_DATETIME.to_string(),
        columns::END_DATETIME.to_string(),
    ];
    let rec = WorkOrderRecord {
        start_datetime: Some(at(2024, 4, 2, 8)),
        end_datetime: Some(at(2024, 4, 2, 9)),
        ..Default::default()
    };
    let series = compute_series(&WorkOrderTable::new(cols, vec![rec]));

    assert!(series.availability.is_none());
    assert!(series.maintenance_types.is_none());
    assert!(series.mtbf.is_none());
    assert!(series.mttr.is_none());
}
