use super::{day_label, format_tick_time};
use crate::constants::MS_TO_KMH;
use crate::report::{MaxEntry, MaxStamp, ReportModel};

/// Render one maxima entry as a console line.
pub fn format_max_entry(entry: &MaxEntry, day: f64) -> String {
    let Some(speed) = entry.speed else {
        return format!("{} : missing data", entry.label);
    };
    let direction = entry
        .direction
        .map_or_else(|| "-".to_string(), |d| format!("{d:.1}"));
    let when = match entry.stamp {
        Some(MaxStamp::Tick(stamp)) => format_tick_time(stamp),
        Some(MaxStamp::Day) | None => day_label(day),
    };
    format!(
        "{} : {:.3} m/s ({:.3} km/h) at {} deg on {}",
        entry.label,
        speed,
        speed * MS_TO_KMH,
        direction,
        when
    )
}

/// Console summary: one line per maxima entry.
pub fn summary_lines(report: &ReportModel) -> Vec<String> {
    report
        .maxima
        .iter()
        .map(|entry| format_max_entry(entry, report.day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_with_tick() {
        let entry = MaxEntry {
            label: "Max over 1s".to_string(),
            speed: Some(5.0),
            direction: Some(90.0),
            stamp: Some(MaxStamp::Tick(0.25)),
        };
        assert_eq!(
            format_max_entry(&entry, 0.0),
            "Max over 1s : 5.000 m/s (18.000 km/h) at 90.0 deg on 01-01-1970 00:00:00.25"
        );
    }

    #[test]
    fn test_format_global_entry_uses_day() {
        let entry = MaxEntry {
            label: "Global average".to_string(),
            speed: Some(1.2345),
            direction: Some(359.9),
            stamp: Some(MaxStamp::Day),
        };
        assert_eq!(
            format_max_entry(&entry, 0.0),
            "Global average : 1.234 m/s (4.444 km/h) at 359.9 deg on 01-01-1970"
        );
    }

    #[test]
    fn test_format_missing_entry() {
        let entry = MaxEntry {
            label: "Max over 10min".to_string(),
            speed: None,
            direction: None,
            stamp: None,
        };
        assert_eq!(format_max_entry(&entry, 0.0), "Max over 10min : missing data");
    }
}
