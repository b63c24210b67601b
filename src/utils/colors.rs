/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Availability colour:
/// \>= 95% → green
/// \>= 85% → yellow
/// below → red
pub fn color_for_availability(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v >= 0.95 => GREEN,
        Some(v) if v >= 0.85 => YELLOW,
        Some(_) => RED,
        None => GREY,
    }
}

/// Grey out placeholder values ("N/A" or empty).
pub fn colorize_optional(value: &str, na: &str) -> String {
    if value.trim().is_empty() || value.trim() == na {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
