//! Formatting utilities used for CLI and report outputs.

use crate::models::report::MS_PER_HOUR;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

/// Cut `s` so that it occupies at most `width` terminal columns.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Milliseconds → "08h 30m" (minutes are truncated).
pub fn ms2readable(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let total_minutes = ms.abs() / 60_000;
    let (h, m) = (total_minutes / 60, total_minutes % 60);
    format!("{sign}{h:02}h {m:02}m")
}

/// Fractional hours → "08h 30m".
pub fn hours2readable(hours: f64) -> String {
    ms2readable((hours * MS_PER_HOUR).round() as i64)
}

/// Short hour label used on top of chart bars, e.g. "7.5".
pub fn hours_short(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
