//! Formatting utilities used for CLI and export outputs.

pub const NOT_AVAILABLE: &str = "N/A";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Fraction → "99.17%" (two decimals), or the placeholder.
pub fn fmt_pct(value: Option<f64>, na: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v * 100.0),
        _ => na.to_string(),
    }
}

/// Fraction → "99.2%", used for bar labels.
pub fn fmt_pct_short(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}

/// Hours with two decimals, or the placeholder.
pub fn fmt_hours(value: Option<f64>, na: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => na.to_string(),
    }
}

/// Render a spreadsheet number as text: integers lose the trailing ".0".
pub fn number_to_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
