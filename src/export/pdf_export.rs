// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportRow, get_headers, rows_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfReport, ReportHeading};
use crate::models::DashboardView;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: KPI cards on top, then every chart point as a table.
pub(crate) fn export_pdf(
    view: &DashboardView,
    rows: &[ReportRow],
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();

    // The cards are drawn as boxes; the table keeps only the chart rows.
    let chart_rows: Vec<ReportRow> = rows.iter().filter(|r| r.section != "KPI").cloned().collect();
    let data_vec = rows_to_table(&chart_rows);

    let subtitle = format!(
        "Range: {} | Scope: {}",
        view.selection.range, view.selection.scope
    );
    let heading = ReportHeading {
        title,
        subtitle: &subtitle,
    };

    let mut pdf = PdfReport::new();
    pdf.write_report(&heading, &view.cards.as_pairs(), &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
