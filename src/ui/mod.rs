pub mod dashboard;
pub mod messages;
