//! Shared helpers for document composition.

use chrono::{Datelike, Local};

/// Current date in the printed format, e.g. "15/01/2026".
pub fn format_french_date() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Calendar year used as the numbering period for virements.
pub fn current_year() -> i32 {
    Local::now().year()
}
