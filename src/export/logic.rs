// src/export/logic.rs

use crate::config::Config;
use crate::core::build_from_table;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::view_to_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::{FilterSelection, WorkOrderTable};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level report export.
pub struct ExportLogic;

impl ExportLogic {
    /// Compute the dashboard for `selection` and write it as `format`.
    ///
    /// - `table` is the already decoded upload
    /// - an empty selection only warns and writes nothing
    /// - `period` is used for the PDF title only; the bounds already live in `selection`
    pub fn export(
        table: &WorkOrderTable,
        selection: &FilterSelection,
        cfg: &Config,
        format: ExportFormat,
        out: &Path,
        period: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(out, force)?;

        let view = build_from_table(table, selection, cfg);

        if view.snapshot.is_none() {
            warning(format!("{} Nothing exported.", view.message));
            return Ok(());
        }

        let rows = view_to_rows(&view);

        match format {
            ExportFormat::Csv => export_csv(&rows, out)?,
            ExportFormat::Json => export_json(&view, out)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &view.charts, out)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(period, selection);
                export_pdf(&view, &rows, out, &title)?
            }
        }

        Ok(())
    }
}

/// PDF title from the period expression, falling back to the explicit bounds.
pub(crate) fn build_pdf_title(period: Option<&str>, selection: &FilterSelection) -> String {
    const BASE: &str = "Maintenance KPIs";

    let Some(p) = period.map(str::trim) else {
        return match (selection.range.start, selection.range.end) {
            (Some(s), Some(e)) => format!("{BASE} from {s} to {e}"),
            _ => BASE.to_string(),
        };
    };

    match p.len() {
        // YYYY
        4 => format!("{BASE} for year {p}"),
        // YYYY-MM
        7 => match p.split_once('-') {
            Some((y, m)) => format!("{BASE} for {} {}", crate::utils::date::month_name(m), y),
            None => BASE.to_string(),
        },
        // YYYY-MM-DD
        10 => format!("{BASE} for date {p}"),
        _ => match p.split_once(':') {
            Some((a, b)) => format!("{BASE} from {} to {}", a.trim(), b.trim()),
            None => BASE.to_string(),
        },
    }
}
