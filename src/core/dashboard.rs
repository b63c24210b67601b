use crate::config::Config;
use crate::core::{charts, filter, kpi, series};
use crate::errors::AppError;
use crate::ingest::parse_upload;
use crate::models::{
    Charts, DashboardState, DashboardView, DateRange, FilterSelection, KpiCards, KpiSnapshot,
    ScopeOption, ScopeSelector, Upload, UploadOutcome, WorkOrderTable,
};
use crate::utils::formatting::{fmt_hours, fmt_pct};

pub const NO_UPLOAD_MESSAGE: &str = "Please upload an Excel file with maintenance data.";

/// Upload step: status message, scope options and the default date range.
///
/// Any ingestion failure keeps the dashboard `Empty`.
pub fn on_upload(upload: Option<&Upload>) -> UploadOutcome {
    let Some(upload) = upload else {
        return empty_outcome(NO_UPLOAD_MESSAGE.to_string());
    };

    match parse_upload(upload) {
        Ok(table) => UploadOutcome {
            state: DashboardState::Loaded,
            message: format!("File '{}' loaded successfully.", upload.filename),
            scope_options: scope_options(&table),
            default_scope: ScopeSelector::All,
            default_range: default_range(&table),
            sections_visible: true,
        },
        Err(e) => empty_outcome(upload_error_message(&e)),
    }
}

fn empty_outcome(message: String) -> UploadOutcome {
    UploadOutcome {
        state: DashboardState::Empty,
        message,
        scope_options: Vec::new(),
        default_scope: ScopeSelector::All,
        default_range: DateRange::unbounded(),
        sections_visible: false,
    }
}

/// "Whole plant", then every area, then every equipment id (each sorted).
pub fn scope_options(table: &WorkOrderTable) -> Vec<ScopeOption> {
    let mut options = vec![ScopeOption::from(&ScopeSelector::All)];

    options.extend(
        table
            .distinct_areas()
            .into_iter()
            .map(|a| ScopeOption::from(&ScopeSelector::Area(a))),
    );
    options.extend(
        table
            .distinct_equipment()
            .into_iter()
            .map(|e| ScopeOption::from(&ScopeSelector::Equipment(e))),
    );

    options
}

pub fn default_range(table: &WorkOrderTable) -> DateRange {
    let (start, end) = table.date_bounds();
    DateRange::new(start, end)
}

/// Recompute the whole dashboard for one interaction.
///
/// The table is rebuilt from the upload bytes each time; nothing is cached.
pub fn build_dashboard(
    upload: Option<&Upload>,
    selection: &FilterSelection,
    cfg: &Config,
) -> DashboardView {
    let Some(upload) = upload else {
        return empty_view(NO_UPLOAD_MESSAGE.to_string(), selection, cfg);
    };

    let table = match parse_upload(upload) {
        Ok(t) => t,
        Err(e) => return empty_view(upload_error_message(&e), selection, cfg),
    };

    build_from_table(&table, selection, cfg)
}

/// Filter + aggregate + format an already decoded table.
pub fn build_from_table(
    table: &WorkOrderTable,
    selection: &FilterSelection,
    cfg: &Config,
) -> DashboardView {
    let filtered = filter::filter(Some(table), &selection.range, &selection.scope);

    if filtered.is_empty() {
        return DashboardView {
            state: DashboardState::Loaded,
            message: AppError::EmptyResult.to_string(),
            selection: selection.clone(),
            cards: KpiCards::not_available(&cfg.not_available),
            charts: Charts::placeholders(),
            snapshot: None,
        };
    }

    let snapshot = kpi::compute_kpis(&filtered, &selection.range);
    let series = series::compute_series(&filtered);

    DashboardView {
        state: DashboardState::Loaded,
        message: format!("{} work orders selected.", filtered.len()),
        selection: selection.clone(),
        cards: format_cards(&snapshot, &cfg.not_available),
        charts: charts::build_charts(&series, cfg),
        snapshot: Some(snapshot),
    }
}

/// Text for the KPI cards; unavailable values become `na`.
pub fn format_cards(snapshot: &KpiSnapshot, na: &str) -> KpiCards {
    KpiCards {
        availability: fmt_pct(snapshot.availability, na),
        mtbf: fmt_hours(snapshot.mtbf, na),
        mttr: fmt_hours(snapshot.mttr, na),
        interventions: snapshot.total_interventions.to_string(),
    }
}

fn empty_view(message: String, selection: &FilterSelection, cfg: &Config) -> DashboardView {
    DashboardView {
        state: DashboardState::Empty,
        message,
        selection: selection.clone(),
        cards: KpiCards::not_available(&cfg.not_available),
        charts: Charts::placeholders(),
        snapshot: None,
    }
}

fn upload_error_message(e: &AppError) -> String {
    match e {
        AppError::UnsupportedFormat(_) => {
            "Unsupported format. Please upload an Excel file (.xlsx).".to_string()
        }
        other => other.to_string(),
    }
}
