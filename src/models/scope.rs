use std::fmt;

use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::table::columns;

const ALL: &str = "ALL";
const AREA_PREFIX: &str = "AREA__";
const EQUIP_PREFIX: &str = "EQUIP__";

/// Analysis granularity: whole plant, one area, or one equipment unit.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "value")]
pub enum ScopeSelector {
    #[default]
    All,
    Area(String),
    Equipment(String),
}

impl ScopeSelector {
    /// Decode a selector value.
    ///
    /// Accepted forms:
    /// - `ALL` / `all` / empty → whole plant
    /// - `AREA__<name>` or `area:<name>`
    /// - `EQUIP__<id>`, `equip:<id>` or `equipment:<id>`
    pub fn parse(value: &str) -> AppResult<Self> {
        let v = value.trim();

        if v.is_empty() || v.eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }

        if let Some(name) = v.strip_prefix(AREA_PREFIX) {
            return Self::named(name, Self::Area, value);
        }
        if let Some(id) = v.strip_prefix(EQUIP_PREFIX) {
            return Self::named(id, Self::Equipment, value);
        }

        if let Some((kind, rest)) = v.split_once(':') {
            match kind.trim().to_ascii_lowercase().as_str() {
                "area" => return Self::named(rest, Self::Area, value),
                "equip" | "equipment" => return Self::named(rest, Self::Equipment, value),
                _ => {}
            }
        }

        Err(AppError::InvalidScope(value.to_string()))
    }

    fn named(name: &str, build: fn(String) -> Self, raw: &str) -> AppResult<Self> {
        if name.is_empty() {
            return Err(AppError::InvalidScope(raw.to_string()));
        }
        Ok(build(name.to_string()))
    }

    /// Encoded selector value, as used by the scope option list.
    pub fn encode(&self) -> String {
        match self {
            ScopeSelector::All => ALL.to_string(),
            ScopeSelector::Area(name) => format!("{AREA_PREFIX}{name}"),
            ScopeSelector::Equipment(id) => format!("{EQUIP_PREFIX}{id}"),
        }
    }

    /// Column the selector filters on; `None` for the whole plant.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            ScopeSelector::All => None,
            ScopeSelector::Area(_) => Some(columns::AREA),
            ScopeSelector::Equipment(_) => Some(columns::EQUIPMENT),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ScopeSelector::All => "Whole plant".to_string(),
            ScopeSelector::Area(name) => format!("Area: {name}"),
            ScopeSelector::Equipment(id) => format!("Equipment: {id}"),
        }
    }
}

impl fmt::Display for ScopeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Entry of the scope dropdown.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScopeOption {
    pub label: String,
    pub value: String,
}

impl From<&ScopeSelector> for ScopeOption {
    fn from(s: &ScopeSelector) -> Self {
        Self {
            label: s.label(),
            value: s.encode(),
        }
    }
}
