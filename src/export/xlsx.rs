// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{ReportRow, get_headers, row_to_vec};
use crate::export::notify_export_success;
use crate::models::figure::ChartKind;
use crate::models::{Charts, FigureSpec};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Chart, ChartFormat, ChartSolidFill, ChartType, Color, Format, FormatAlign, FormatBorder,
    FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const REPORT_SHEET: &str = "Dashboard";
const SERIES_SHEET: &str = "Series";
const CHARTS_SHEET: &str = "Charts";

/// Export XLSX: a styled report sheet, the chart data, and native Excel charts.
pub(crate) fn export_xlsx(rows: &[ReportRow], charts: &Charts, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    write_report_sheet(workbook.add_worksheet(), rows)?;

    let blocks = write_series_sheet(workbook.add_worksheet(), charts)?;

    if !blocks.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(CHARTS_SHEET)?;
        for (i, block) in blocks.iter().enumerate() {
            let chart = build_chart(block);
            // two charts per row, 20 rows apart
            let row = (i / 2) as u32 * 20;
            let col = (i % 2) as u16 * 9;
            sheet.insert_chart(row, col, &chart)?;
        }
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_report_sheet(worksheet: &mut Worksheet, rows: &[ReportRow]) -> AppResult<()> {
    worksheet.set_name(REPORT_SHEET)?;

    let headers = get_headers();
    let header_format = header_format();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row_to_vec(r).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(())
}

/// Location of one chart's data on the series sheet.
struct SeriesBlock<'a> {
    figure: &'a FigureSpec,
    label_col: u16,
    last_row: u32,
}

/// Two columns per chart (label, value), one blank column between charts.
fn write_series_sheet<'a>(
    worksheet: &mut Worksheet,
    charts: &'a Charts,
) -> AppResult<Vec<SeriesBlock<'a>>> {
    worksheet.set_name(SERIES_SHEET)?;

    let header_format = header_format();
    let mut blocks = Vec::new();

    for (i, fig) in charts.iter().enumerate() {
        let label_col = (i * 3) as u16;

        worksheet.write_with_format(0, label_col, fig.title.as_str(), &header_format)?;
        worksheet.write_with_format(
            0,
            label_col + 1,
            fig.y_label.as_deref().unwrap_or("value"),
            &header_format,
        )?;
        worksheet.set_column_width(label_col, 22.0)?;
        worksheet.set_column_width(label_col + 1, 12.0)?;

        for (j, p) in fig.points.iter().enumerate() {
            let row = (j + 1) as u32;
            worksheet.write(row, label_col, p.label.as_str())?;
            worksheet.write(row, label_col + 1, p.value)?;
        }

        if !fig.points.is_empty() {
            blocks.push(SeriesBlock {
                figure: fig,
                label_col,
                last_row: fig.points.len() as u32,
            });
        }
    }

    Ok(blocks)
}

fn build_chart(block: &SeriesBlock<'_>) -> Chart {
    let fig = block.figure;

    let chart_type = match fig.kind {
        Some(ChartKind::Pie) => ChartType::Doughnut,
        Some(ChartKind::Line) => ChartType::Line,
        _ => ChartType::Column,
    };

    let mut chart = Chart::new(chart_type);
    chart.title().set_name(fig.title.as_str());

    let series = chart
        .add_series()
        .set_categories((SERIES_SHEET, 1, block.label_col, block.last_row, block.label_col))
        .set_values((
            SERIES_SHEET,
            1,
            block.label_col + 1,
            block.last_row,
            block.label_col + 1,
        ));

    // Pie slices keep Excel's per-point colours.
    if fig.kind != Some(ChartKind::Pie)
        && let Some(rgb) = fig.points.first().and_then(|p| hex_to_rgb(&p.color))
    {
        let mut fill = ChartSolidFill::new();
        fill.set_color(Color::RGB(rgb));
        series.set_format(ChartFormat::new().set_solid_fill(&fill));
    }

    chart
}

/// "#2ECC71" → 0x2ECC71
fn hex_to_rgb(hex: &str) -> Option<u32> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    u32::from_str_radix(h, 16).ok()
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Numeric strings become number cells, anything else stays text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet.write_with_format(row, col, num, &fmt)?;
        return Ok(());
    }

    worksheet.write_with_format(row, col, s, &base)?;
    Ok(())
}
