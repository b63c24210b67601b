// src/export/model.rs

use serde::Serialize;

use crate::models::figure::ChartKind;
use crate::models::{DashboardView, FigureSpec};

/// Flat row shared by the CSV / XLSX / PDF reports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub section: String,
    pub metric: String,
    pub period: String,
    pub value: String,
}

/// Header for CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["section", "metric", "period", "value"]
}

pub(crate) fn row_to_vec(r: &ReportRow) -> Vec<String> {
    vec![
        r.section.clone(),
        r.metric.clone(),
        r.period.clone(),
        r.value.clone(),
    ]
}

pub(crate) fn rows_to_table(rows: &[ReportRow]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_vec).collect()
}

/// KPI cards first, then every chart point in chart order.
pub fn view_to_rows(view: &DashboardView) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = view
        .cards
        .as_pairs()
        .iter()
        .map(|(label, value)| ReportRow {
            section: "KPI".to_string(),
            metric: label.to_string(),
            period: String::new(),
            value: value.to_string(),
        })
        .collect();

    for fig in view.charts.iter() {
        rows.extend(figure_rows(fig));
    }

    rows
}

pub(crate) fn figure_rows(fig: &FigureSpec) -> Vec<ReportRow> {
    let metric = match fig.kind {
        Some(ChartKind::Pie) => "count".to_string(),
        _ => fig.y_label.clone().unwrap_or_else(|| "value".to_string()),
    };

    fig.points
        .iter()
        .map(|p| ReportRow {
            section: fig.title.clone(),
            metric: metric.clone(),
            period: p.label.clone(),
            value: format_point_value(fig.kind, p.value),
        })
        .collect()
}

fn format_point_value(kind: Option<ChartKind>, v: f64) -> String {
    match kind {
        Some(ChartKind::Pie) => format!("{}", v as i64),
        Some(ChartKind::Bar) => format!("{:.4}", v),
        _ => format!("{:.2}", v),
    }
}
