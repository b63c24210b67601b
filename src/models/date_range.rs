use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppResult;
use crate::utils::date::{parse_date, parse_period};

/// Inclusive pair of optional bounds, compared against record dates.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a range from `--from` / `--to` strings (YYYY-MM-DD).
    pub fn from_strs(start: Option<&str>, end: Option<&str>) -> AppResult<Self> {
        let start = start.map(parse_date).transpose()?;
        let end = end.map(parse_date).transpose()?;
        Ok(Self { start, end })
    }

    /// Build a range from a period expression (see [`parse_period`]).
    pub fn from_period(expr: &str) -> AppResult<Self> {
        let (start, end) = parse_period(expr)?;
        Ok(Self::new(Some(start), Some(end)))
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Fill missing bounds from `other`, keeping the ones already set.
    pub fn or_bounds(self, other: DateRange) -> Self {
        Self {
            start: self.start.or(other.start),
            end: self.end.or(other.end),
        }
    }

    /// Whole days between the bounds, when both are set.
    pub fn span_days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((e - s).num_days()),
            _ => None,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "…".into());
        write!(f, "{} → {}", show(self.start), show(self.end))
    }
}
