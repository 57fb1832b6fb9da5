/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out zero durations in KPI output.
///
/// Example:
/// `colorize_duration("00h 00m")` → "<grey>00h 00m<reset>"
pub fn colorize_duration(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}
