#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rmaintkpi::config::Config;
use rmaintkpi::models::{FilterSelection, Upload, WorkOrderTable};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rmk() -> Command {
    cargo_bin_cmd!("rmaintkpi")
}

/// One cell of a fixture row.
#[derive(Clone, Debug)]
pub enum Cell {
    Text(&'static str),
    Num(f64),
    Bool(bool),
    Blank,
}

pub const HEADERS: [&str; 7] = [
    "start_datetime",
    "end_datetime",
    "duration_minutes",
    "area",
    "equipment",
    "is_failure",
    "maintenance_type",
];

/// Three April 2024 work orders on two machines:
/// 60 / 120 / 180 minutes, failures on the first and last.
pub fn april_rows() -> Vec<Vec<Cell>> {
    use Cell::*;
    vec![
        vec![
            Text("2024-04-03 08:00:00"),
            Text("2024-04-03 09:00:00"),
            Num(60.0),
            Text("Packing"),
            Text("PK-01"),
            Bool(true),
            Text("Correctivo"),
        ],
        vec![
            Text("2024-04-10 10:00:00"),
            Text("2024-04-10 12:00:00"),
            Num(120.0),
            Text("Packing"),
            Text("PK-02"),
            Bool(false),
            Text("Preventivo"),
        ],
        vec![
            Text("2024-04-20 14:00:00"),
            Text("2024-04-20 17:00:00"),
            Num(180.0),
            Text("Molding"),
            Text("PK-01"),
            Bool(true),
            Text("Correctivo"),
        ],
    ]
}

/// Build an .xlsx workbook in memory: header row then `rows`.
pub fn xlsx_bytes(headers: &[&str], rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();

    for (c, h) in headers.iter().enumerate() {
        ws.write_string(0, c as u16, *h).expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Text(s) => {
                    ws.write_string(r, c, *s).expect("write text");
                }
                Cell::Num(n) => {
                    ws.write_number(r, c, *n).expect("write number");
                }
                Cell::Bool(b) => {
                    ws.write_boolean(r, c, *b).expect("write bool");
                }
                Cell::Blank => {}
            }
        }
    }

    workbook.save_to_buffer().expect("workbook to buffer")
}

pub fn april_upload() -> Upload {
    Upload::new("work_orders.xlsx", xlsx_bytes(&HEADERS, &april_rows()))
}

pub fn april_table() -> WorkOrderTable {
    rmaintkpi::ingest::parse_upload(&april_upload()).expect("parse fixture")
}

pub fn default_cfg() -> Config {
    Config::default()
}

pub fn all_selection() -> FilterSelection {
    FilterSelection::default()
}

/// Create a unique fixture file path inside the system temp dir and write `bytes` to it.
pub fn write_fixture(name: &str, ext: &str, bytes: &[u8]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmaintkpi.{}", name, ext));
    fs::write(&path, bytes).expect("write fixture");
    path.to_string_lossy().to_string()
}

pub fn april_fixture(name: &str) -> String {
    write_fixture(name, "xlsx", &xlsx_bytes(&HEADERS, &april_rows()))
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A config path that does not exist, so defaults are used and nothing in $HOME is read.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmaintkpi.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
