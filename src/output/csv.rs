use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{day_label, export_file_name, format_tick_time};
use crate::constants::MS_TO_KMH;
use crate::error::Result;
use crate::report::{MaxStamp, ReportModel};

/// Write the day report in the semicolon-CSV layout: a header block naming
/// the day, the maxima table, then the wide per-tick table. Text fields are
/// quoted; absent values leave their field blank.
pub fn write_csv<W: Write>(report: &ReportModel, out: &mut W) -> Result<()> {
    let day = day_label(report.day);

    writeln!(out, "\"Wind measurements on \";\"{day}\";;;")?;
    writeln!(out, ";;;;")?;
    writeln!(out, ";\"max [m/s]\";\"max [km/h]\";\"[deg]\";\"time\"")?;
    for entry in &report.maxima {
        match entry.speed {
            Some(speed) => {
                let direction = entry
                    .direction
                    .map_or(String::new(), |d| format!("{d:.1}"));
                let when = match entry.stamp {
                    Some(MaxStamp::Tick(stamp)) => format_tick_time(stamp),
                    Some(MaxStamp::Day) | None => day.clone(),
                };
                writeln!(
                    out,
                    "\"{}\";{:.3};{:.3};{};{}",
                    entry.label,
                    speed,
                    speed * MS_TO_KMH,
                    direction,
                    when
                )?;
            }
            None => writeln!(out, "\"{}\";;;;", entry.label)?,
        }
    }
    writeln!(out, ";;;;")?;

    let mut units = String::from("\"\";\"measure\";\"measure\";\"wind NS\";\"wind WE\"");
    let mut titles = String::from("\"time\";\"[m/s]\";\"[deg]\";\"[m/s]\";\"[m/s]\"");
    for window in &report.windows {
        let label = window.label();
        units.push_str(&format!(";\"{label}\";\"{label}\""));
        titles.push_str(";\"[m/s]\";\"[deg]\"");
    }
    writeln!(out, "{units}")?;
    writeln!(out, "{titles}")?;

    for row in &report.rows {
        let raw_speed = row.raw_speed.map_or(String::new(), |v| format!("{v:.4}"));
        let raw_direction = row
            .raw_direction
            .map_or(String::new(), |v| format!("{v:.1}"));
        let vector = row
            .vector
            .map_or_else(|| ";".to_string(), |v| format!("{:.4};{:.4}", v.x, v.y));
        write!(
            out,
            "\"{}\";{};{};{}",
            format_tick_time(row.stamp),
            raw_speed,
            raw_direction,
            vector
        )?;
        for value in &row.windows {
            let speed = value.speed.map_or(String::new(), |v| format!("{v:.4}"));
            let direction = value.direction.map_or(String::new(), |v| format!("{v:.1}"));
            write!(out, ";{speed};{direction}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write the report to `<dir>/Wind Gill DD-MM-YYYY.csv` and return the path.
pub fn export_to_file(report: &ReportModel, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(report.day));
    let file = std::fs::File::create(&path)?;
    let mut out = BufWriter::new(file);
    write_csv(report, &mut out)?;
    out.flush()?;
    Ok(path)
}
