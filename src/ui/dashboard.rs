//! Terminal rendering of the dashboard: KPI cards followed by one table per chart.

use crate::models::figure::ChartKind;
use crate::models::{DashboardState, DashboardView, FigureSpec, UploadOutcome};
use crate::utils::colors::{CYAN, color_for_availability, colorize, colorize_optional};
use crate::utils::formatting::{bold, pad_left, pad_right};
use crate::utils::table::{Column, Table};

pub fn render_dashboard(view: &DashboardView, na: &str) -> String {
    let mut out = String::new();

    out.push_str(&bold("Maintenance KPI Dashboard"));
    out.push('\n');
    out.push_str(&format!(
        "Range: {} | Scope: {}\n",
        view.selection.range, view.selection.scope
    ));
    out.push_str(&format!("{}\n\n", view.message));

    let availability = view.snapshot.as_ref().and_then(|s| s.availability);
    for (label, value) in view.cards.as_pairs() {
        // pad before colouring, escape codes have no width
        let padded = pad_left(value, 10);
        let shown = if label == "Availability" && value != na {
            colorize(&padded, color_for_availability(availability))
        } else {
            colorize_optional(&padded, na)
        };
        out.push_str(&format!("  {} {}\n", pad_right(label, 14), shown));
    }

    if view.state == DashboardState::Empty {
        return out;
    }

    for figure in view.charts.iter() {
        out.push('\n');
        out.push_str(&render_figure(figure));
    }

    out
}

pub fn render_figure(figure: &FigureSpec) -> String {
    if figure.is_placeholder() {
        return format!("{}\n", colorize("(no data)", CYAN));
    }

    let mut out = format!("{}\n", bold(&figure.title));

    if figure.points.is_empty() {
        out.push_str("  (no points)\n");
        return out;
    }

    let value_header = match figure.kind {
        Some(ChartKind::Pie) => "count",
        _ => figure.y_label.as_deref().unwrap_or("value"),
    };

    let mut table = Table::new(vec![
        Column::left(figure.x_label.as_deref().unwrap_or("label")),
        Column::right(value_header),
        Column::right(""),
    ]);

    for p in &figure.points {
        let value = match figure.kind {
            Some(ChartKind::Pie) => format!("{}", p.value as i64),
            _ => format!("{:.2}", p.value),
        };
        table.add_row(vec![
            p.label.clone(),
            value,
            p.text.clone().unwrap_or_default(),
        ]);
    }

    out.push_str(&table.render());
    out
}

pub fn render_upload(outcome: &UploadOutcome) -> String {
    let mut out = format!("{}\n", outcome.message);

    if outcome.state == DashboardState::Empty {
        return out;
    }

    out.push_str(&format!("Default range: {}\n\n", outcome.default_range));

    let mut table = Table::new(vec![Column::left("scope"), Column::left("value")]);
    for opt in &outcome.scope_options {
        table.add_row(vec![opt.label.clone(), opt.value.clone()]);
    }
    out.push_str(&table.render());
    out
}
