mod csv;
mod text;

pub use self::csv::{export_to_file, write_csv};
pub use self::text::{format_max_entry, summary_lines};

use chrono::DateTime;

/// `DD-MM-YYYY HH:MM:SS.cc` (UTC) for one grid tick. The fractional part is
/// rendered to centiseconds; grid fractions are exactly .00/.25/.50/.75.
pub fn format_tick_time(stamp: f64) -> String {
    let secs = stamp.floor();
    let centis = ((stamp - secs) * 100.0).round() as u32;
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(dt) => format!("{}.{:02}", dt.format("%d-%m-%Y %H:%M:%S"), centis),
        None => format!("{stamp:.2}"),
    }
}

/// `DD-MM-YYYY` label for a day start.
pub fn day_label(day: f64) -> String {
    match DateTime::from_timestamp(day as i64, 0) {
        Some(dt) => dt.format("%d-%m-%Y").to_string(),
        None => format!("{day}"),
    }
}

/// `HH:MM:SS` clock time, for availability reporting.
pub fn clock_time(stamp: f64) -> String {
    match DateTime::from_timestamp(stamp as i64, 0) {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => format!("{stamp:.0}"),
    }
}

/// Export file name for one day.
pub fn export_file_name(day: f64) -> String {
    format!("Wind Gill {}.csv", day_label(day))
}
