pub mod charts;
pub mod dashboard;
pub mod filter;
pub mod kpi;
pub mod series;

pub use dashboard::{build_dashboard, build_from_table, on_upload};
pub use filter::filter;
pub use kpi::compute_kpis;
pub use series::compute_series;
