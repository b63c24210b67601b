use serde::Serialize;

/// Category of a maintenance intervention as written in the work-order log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub enum MaintenanceType {
    Correctivo,
    Preventivo,
    Predictivo,
    Other(String),
}

impl MaintenanceType {
    /// The categories shown in the distribution chart, in display order.
    pub const KNOWN: [MaintenanceType; 3] = [
        MaintenanceType::Correctivo,
        MaintenanceType::Preventivo,
        MaintenanceType::Predictivo,
    ];

    /// Map a cell value to a category. Matching is exact, like the source data.
    pub fn mt_from_str(s: &str) -> Self {
        match s.trim() {
            "Correctivo" => Self::Correctivo,
            "Preventivo" => Self::Preventivo,
            "Predictivo" => Self::Predictivo,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn mt_as_str(&self) -> &str {
        match self {
            MaintenanceType::Correctivo => "Correctivo",
            MaintenanceType::Preventivo => "Preventivo",
            MaintenanceType::Predictivo => "Predictivo",
            MaintenanceType::Other(s) => s.as_str(),
        }
    }
}
