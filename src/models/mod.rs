pub mod dashboard;
pub mod date_range;
pub mod figure;
pub mod kpi;
pub mod maintenance_type;
pub mod scope;
pub mod table;
pub mod work_order;

pub use dashboard::{DashboardState, DashboardView, FilterSelection, KpiCards, Upload, UploadOutcome};
pub use date_range::DateRange;
pub use figure::{ChartKind, Charts, FigureSpec};
pub use kpi::{KpiSnapshot, MonthlyPoint, SeriesSet, TypeCount};
pub use maintenance_type::MaintenanceType;
pub use scope::{ScopeOption, ScopeSelector};
pub use table::WorkOrderTable;
pub use work_order::WorkOrderRecord;
