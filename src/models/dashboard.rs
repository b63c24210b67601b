use serde::Serialize;

use super::date_range::DateRange;
use super::figure::Charts;
use super::kpi::KpiSnapshot;
use super::scope::{ScopeOption, ScopeSelector};

/// Raw uploaded file: held by the caller and re-parsed on every computation.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Current state of the filter controls.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FilterSelection {
    pub range: DateRange,
    pub scope: ScopeSelector,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DashboardState {
    /// No file loaded, or the last upload failed.
    Empty,
    Loaded,
}

/// Text shown on the four KPI cards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KpiCards {
    pub availability: String,
    pub mtbf: String,
    pub mttr: String,
    pub interventions: String,
}

impl KpiCards {
    pub fn not_available(label: &str) -> Self {
        Self {
            availability: label.to_string(),
            mtbf: label.to_string(),
            mttr: label.to_string(),
            interventions: label.to_string(),
        }
    }

    pub fn as_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("Availability", self.availability.as_str()),
            ("MTBF (hrs)", self.mtbf.as_str()),
            ("MTTR (hrs)", self.mttr.as_str()),
            ("Interventions", self.interventions.as_str()),
        ]
    }
}

/// Everything the presentation layer needs after one interaction.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub state: DashboardState,
    pub message: String,
    pub selection: FilterSelection,
    pub cards: KpiCards,
    pub charts: Charts,
    pub snapshot: Option<KpiSnapshot>,
}

/// Result of the upload step: status line, dropdown options and default range.
#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    pub state: DashboardState,
    pub message: String,
    pub scope_options: Vec<ScopeOption>,
    pub default_scope: ScopeSelector,
    pub default_range: DateRange,
    pub sections_visible: bool,
}
