// src/ingest/cells.rs

use calamine::Data;
use chrono::NaiveDateTime;

use super::excel_date::{excel_serial_to_naive_datetime, parse_datetime_text};
use crate::models::MaintenanceType;
use crate::utils::formatting::number_to_text;

/// Cell → timestamp. Blank cells are `Ok(None)`; anything unreadable is an error message.
pub(crate) fn cell_to_datetime(cell: &Data) -> Result<Option<NaiveDateTime>, String> {
    match cell {
        Data::Empty => Ok(None),
        Data::DateTime(dt) => excel_serial_to_naive_datetime(dt.as_f64())
            .map(Some)
            .ok_or_else(|| format!("invalid date serial {}", dt.as_f64())),
        Data::Float(f) => excel_serial_to_naive_datetime(*f)
            .map(Some)
            .ok_or_else(|| format!("invalid date serial {f}")),
        Data::Int(i) => excel_serial_to_naive_datetime(*i as f64)
            .map(Some)
            .ok_or_else(|| format!("invalid date serial {i}")),
        Data::String(s) | Data::DateTimeIso(s) => {
            if s.trim().is_empty() {
                return Ok(None);
            }
            parse_datetime_text(s)
                .map(Some)
                .ok_or_else(|| format!("unrecognised date {s:?}"))
        }
        other => Err(format!("unexpected date value {other:?}")),
    }
}

/// Cell → number (minutes).
pub(crate) fn cell_to_f64(cell: &Data) -> Result<Option<f64>, String> {
    match cell {
        Data::Empty => Ok(None),
        Data::Float(f) => Ok(Some(*f)),
        Data::Int(i) => Ok(Some(*i as f64)),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .replace(',', ".")
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("not a number: {s:?}"))
        }
        other => Err(format!("unexpected numeric value {other:?}")),
    }
}

/// Cell → boolean flag.
pub(crate) fn cell_to_bool(cell: &Data) -> Result<Option<bool>, String> {
    match cell {
        Data::Empty => Ok(None),
        Data::Bool(b) => Ok(Some(*b)),
        Data::Int(i) => Ok(Some(*i != 0)),
        Data::Float(f) => Ok(Some(*f != 0.0)),
        Data::String(s) => match s.trim().to_lowercase().as_str() {
            "" => Ok(None),
            "true" | "yes" | "si" | "sí" | "1" | "y" | "s" => Ok(Some(true)),
            "false" | "no" | "0" | "n" => Ok(Some(false)),
            _ => Err(format!("not a boolean: {s:?}")),
        },
        other => Err(format!("unexpected boolean value {other:?}")),
    }
}

/// Cell → trimmed text. Numbers are rendered without a trailing ".0".
pub(crate) fn cell_to_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => number_to_text(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => number_to_text(dt.as_f64()),
    };

    if text.is_empty() { None } else { Some(text) }
}

pub(crate) fn cell_to_maintenance_type(cell: &Data) -> Option<MaintenanceType> {
    cell_to_text(cell).map(|s| MaintenanceType::mt_from_str(&s))
}

pub(crate) fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
