pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod scopes;

use crate::cli::parser::{FilterArgs, OutputFormat};
use crate::config::Config;
use crate::core::dashboard::default_range;
use crate::errors::{AppError, AppResult};
use crate::models::{DateRange, FilterSelection, ScopeSelector, WorkOrderTable};
use crate::ui::messages::note;

/// Turn the filter flags into a selection.
///
/// With `auto_range`, bounds left open are taken from the table, as a freshly
/// loaded dashboard would pre-select them. An area or equipment scope needs
/// its column in the table.
pub(crate) fn build_selection(
    filters: &FilterArgs,
    table: Option<&WorkOrderTable>,
    cfg: &Config,
) -> AppResult<FilterSelection> {
    let mut range = match &filters.period {
        Some(p) => DateRange::from_period(p)?,
        None => DateRange::from_strs(filters.from.as_deref(), filters.to.as_deref())?,
    };

    if cfg.auto_range
        && !range.is_bounded()
        && let Some(t) = table
    {
        range = range.or_bounds(default_range(t));
        note(format!("Date range defaulted to {range}"));
    }

    let scope = ScopeSelector::parse(&filters.scope)?;

    // a scope on a column the sheet lacks would silently match nothing
    if let (Some(t), Some(col)) = (table, scope.column()) {
        t.require(col)?;
    }

    Ok(FilterSelection { range, scope })
}

/// `--format` wins, then the config default.
pub(crate) fn output_format(flag: Option<OutputFormat>, cfg: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| {
        if cfg.output_format.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    })
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
}
