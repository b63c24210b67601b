mod common;
use chrono::NaiveDate;
use common::{Cell, HEADERS, april_rows, approx, xlsx_bytes};
use rmaintkpi::errors::AppError;
use rmaintkpi::ingest::{load_workbook, parse_upload};
use rmaintkpi::models::table::columns;
use rmaintkpi::models::{MaintenanceType, Upload};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_load_workbook_reads_all_rows() {
    let bytes = xlsx_bytes(&HEADERS, &april_rows());
    let table = load_workbook(&bytes, "orders.xlsx").expect("load");

    assert_eq!(table.len(), 3);

    let first = &table.records()[0];
    assert_eq!(first.start_datetime, Some(dt(2024, 4, 3, 8, 0)));
    assert_eq!(first.end_datetime, Some(dt(2024, 4, 3, 9, 0)));
    assert_eq!(first.area.as_deref(), Some("Packing"));
    assert_eq!(first.equipment.as_deref(), Some("PK-01"));
    assert_eq!(first.is_failure, Some(true));
    assert_eq!(first.maintenance_type, Some(MaintenanceType::Correctivo));
}

#[test]
fn test_duration_hours_derived_from_minutes() {
    let table = load_workbook(&xlsx_bytes(&HEADERS, &april_rows()), "orders.xlsx").unwrap();

    assert!(table.has(columns::DURATION_HOURS));

    let hours: Vec<f64> = table
        .records()
        .iter()
        .map(|r| r.duration_hours.unwrap())
        .collect();
    assert!(approx(hours[0], 1.0));
    assert!(approx(hours[1], 2.0));
    assert!(approx(hours[2], 3.0));
}

#[test]
fn test_extension_check_is_case_insensitive() {
    let bytes = xlsx_bytes(&HEADERS, &april_rows());
    let table = load_workbook(&bytes, "ORDERS.XLSX").expect("upper-case extension");
    assert_eq!(table.len(), 3);
}

#[test]
fn test_csv_upload_is_unsupported() {
    let upload = Upload::new("orders.csv", b"start_datetime,end_datetime\n".to_vec());

    match parse_upload(&upload) {
        Err(AppError::UnsupportedFormat(name)) => assert_eq!(name, "orders.csv"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn test_unsupported_format_message_mentions_xlsx() {
    let upload = Upload::new("orders.xls", vec![0, 1, 2]);
    let err = parse_upload(&upload).unwrap_err();
    assert!(err.to_string().contains(".xlsx"));
}

#[test]
fn test_corrupt_xlsx_is_parse_failure() {
    let upload = Upload::new("broken.xlsx", b"definitely not a zip archive".to_vec());
    assert!(matches!(
        parse_upload(&upload),
        Err(AppError::ParseFailure(_))
    ));
}

#[test]
fn test_bad_date_cell_reports_row_and_column() {
    let mut rows = april_rows();
    rows[1][0] = Cell::Text("not a date");

    let err = load_workbook(&xlsx_bytes(&HEADERS, &rows), "orders.xlsx").unwrap_err();
    let msg = err.to_string();

    assert!(matches!(err, AppError::ParseFailure(_)));
    assert!(msg.contains("row 3"), "{msg}");
    assert!(msg.contains("start_datetime"), "{msg}");
}

#[test]
fn test_numeric_date_serials_are_converted() {
    // 45385 = 2024-04-03
    let rows = vec![vec![
        Cell::Num(45385.0 + 8.0 / 24.0),
        Cell::Num(45385.0 + 9.0 / 24.0),
        Cell::Num(60.0),
        Cell::Text("Packing"),
        Cell::Text("PK-01"),
        Cell::Bool(true),
        Cell::Text("Correctivo"),
    ]];

    let table = load_workbook(&xlsx_bytes(&HEADERS, &rows), "orders.xlsx").unwrap();
    let r = &table.records()[0];

    assert_eq!(r.start_datetime, Some(dt(2024, 4, 3, 8, 0)));
    assert_eq!(r.end_datetime, Some(dt(2024, 4, 3, 9, 0)));
}

#[test]
fn test_text_flags_and_alternative_date_shapes() {
    let rows = vec![
        vec![
            Cell::Text("03/04/2024 08:00"),
            Cell::Text("2024-04-03T09:30"),
            Cell::Text("90"),
            Cell::Text(" Packing "),
            Cell::Num(101.0),
            Cell::Text("Sí"),
            Cell::Text("Predictivo"),
        ],
        vec![
            Cell::Text("2024-04-05"),
            Cell::Text("2024-04-05"),
            Cell::Text("30,5"),
            Cell::Blank,
            Cell::Blank,
            Cell::Text("no"),
            Cell::Text("Inspección"),
        ],
    ];

    let table = load_workbook(&xlsx_bytes(&HEADERS, &rows), "orders.xlsx").unwrap();
    let a = &table.records()[0];
    let b = &table.records()[1];

    assert_eq!(a.start_datetime, Some(dt(2024, 4, 3, 8, 0)));
    assert_eq!(a.end_datetime, Some(dt(2024, 4, 3, 9, 30)));
    assert!(approx(a.duration_hours.unwrap(), 1.5));
    assert_eq!(a.area.as_deref(), Some("Packing"));
    assert_eq!(a.equipment.as_deref(), Some("101"));
    assert_eq!(a.is_failure, Some(true));
    assert_eq!(a.maintenance_type, Some(MaintenanceType::Predictivo));

    assert_eq!(b.start_datetime, Some(dt(2024, 4, 5, 0, 0)));
    assert!(approx(b.duration_minutes.unwrap(), 30.5));
    assert_eq!(b.area, None);
    assert_eq!(b.equipment, None);
    assert_eq!(b.is_failure, Some(false));
    assert_eq!(
        b.maintenance_type,
        Some(MaintenanceType::Other("Inspección".to_string()))
    );
}

#[test]
fn test_blank_rows_are_skipped() {
    let mut rows = april_rows();
    rows.insert(1, vec![Cell::Blank; 7]);
    rows.insert(2, vec![Cell::Text("   ")]);

    let table = load_workbook(&xlsx_bytes(&HEADERS, &rows), "orders.xlsx").unwrap();
    assert_eq!(table.len(), 3);
}

#[test]
fn test_out_of_range_date_serial_is_parse_failure() {
    let headers = ["start_datetime", "end_datetime"];
    let rows = vec![vec![Cell::Num(1e15), Cell::Text("2024-04-03 09:00:00")]];

    match load_workbook(&xlsx_bytes(&headers, &rows), "orders.xlsx") {
        Err(AppError::ParseFailure(msg)) => assert!(msg.contains("start_datetime")),
        other => panic!("expected ParseFailure, got {other:?}"),
    }
}

#[test]
fn test_missing_columns_are_tolerated() {
    let headers = ["start_datetime", "end_datetime", "area"];
    let rows = vec![vec![
        Cell::Text("2024-04-03 08:00:00"),
        Cell::Text("2024-04-03 09:00:00"),
        Cell::Text("Packing"),
    ]];

    let table = load_workbook(&xlsx_bytes(&headers, &rows), "orders.xlsx").unwrap();

    assert_eq!(table.len(), 1);
    assert!(!table.has(columns::DURATION_HOURS));
    assert!(!table.has(columns::IS_FAILURE));
    assert!(matches!(
        table.require(columns::IS_FAILURE),
        Err(AppError::MissingColumn(c)) if c == "is_failure"
    ));
    assert!(table.require(columns::AREA).is_ok());
    assert_eq!(table.records()[0].duration_hours, None);
}

#[test]
fn test_header_whitespace_is_ignored_for_lookup() {
    let headers = [
        " start_datetime ",
        "end_datetime",
        "duration_minutes ",
        "area",
        "equipment",
        "is_failure",
        "maintenance_type",
    ];
    let table = load_workbook(&xlsx_bytes(&headers, &april_rows()), "orders.xlsx").unwrap();

    assert!(table.has(columns::START_DATETIME));
    assert!(table.has(columns::DURATION_HOURS));
    assert_eq!(table.records()[2].start_datetime, Some(dt(2024, 4, 20, 14, 0)));
}

#[test]
fn test_distinct_values_and_date_bounds() {
    let table = load_workbook(&xlsx_bytes(&HEADERS, &april_rows()), "orders.xlsx").unwrap();

    assert_eq!(table.distinct_areas(), vec!["Molding", "Packing"]);
    assert_eq!(table.distinct_equipment(), vec!["PK-01", "PK-02"]);

    let (start, end) = table.date_bounds();
    assert_eq!(start, NaiveDate::from_ymd_opt(2024, 4, 3));
    assert_eq!(end, NaiveDate::from_ymd_opt(2024, 4, 20));
}
