//! Single-pass assembly of the full day report.
//!
//! Control flow: grid bounds from the two series, then one forward pass that
//! merges samples onto the grid, projects vectors, feeds the rolling windows
//! and the global reducer, and finally collects the maxima table.

use crate::aggregate::{RollingAggregator, RunningMax, WindowValue};
use crate::config::{AveragingWindow, ExportConfig};
use crate::constants::{PROGRESS_STRIDE, SECONDS_PER_DAY, TICKS_PER_SECOND};
use crate::error::Result;
use crate::grid::Grid;
use crate::merge::MergeCursor;
use crate::series::SampleSeries;
use crate::summary::{DaySummary, SummaryReducer};
use crate::vector::{WindVector, project};

/// One grid row of the computed table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Tick timestamp, UTC epoch seconds.
    pub stamp: f64,
    /// Speed measure that landed on this tick (m/s).
    pub raw_speed: Option<f64>,
    /// Direction measure that landed on this tick (degrees).
    pub raw_direction: Option<f64>,
    /// Held instantaneous speed; empty until both sensors have reported.
    pub speed: Option<f64>,
    /// Wind vector; empty on the same rows `speed` is.
    pub vector: Option<WindVector>,
    /// One value per configured window, in configured order.
    pub windows: Vec<WindowValue>,
}

/// Where a maxima entry happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxStamp {
    /// A specific grid tick, UTC epoch seconds.
    Tick(f64),
    /// The whole report day.
    Day,
}

/// One line of the maxima table.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxEntry {
    pub label: String,
    /// Empty when the underlying average was never computed.
    pub speed: Option<f64>,
    pub direction: Option<f64>,
    pub stamp: Option<MaxStamp>,
}

impl MaxEntry {
    fn missing(label: String) -> Self {
        Self {
            label,
            speed: None,
            direction: None,
            stamp: None,
        }
    }
}

/// The fully computed table plus its maxima, for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    /// Start of the exported day, UTC epoch seconds.
    pub day: f64,
    /// The windows the per-row values refer to, in order.
    pub windows: Vec<AveragingWindow>,
    pub rows: Vec<ReportRow>,
    /// Instantaneous max, one entry per window, then the global average.
    pub maxima: Vec<MaxEntry>,
    pub summary: Option<DaySummary>,
}

impl ReportModel {
    pub fn build(
        speed: &SampleSeries,
        direction: &SampleSeries,
        config: &ExportConfig,
    ) -> Result<Self> {
        Self::build_with_progress(speed, direction, config, |_| {})
    }

    /// Build the report, invoking `progress` with a percentage every few
    /// hundred rows and once at completion.
    pub fn build_with_progress(
        speed: &SampleSeries,
        direction: &SampleSeries,
        config: &ExportConfig,
        mut progress: impl FnMut(u8),
    ) -> Result<Self> {
        let grid = Grid::from_series(speed, direction)?;
        let mut cursor = MergeCursor::new(speed, direction);
        let mut aggregator = RollingAggregator::new(&config.windows);
        let mut reducer = SummaryReducer::new();

        let total = grid.len();
        let mut rows = Vec::with_capacity(total);

        for (idx, stamp) in grid.stamps().enumerate() {
            let tick = cursor.advance(stamp);

            let (inst, vector) = match (tick.held_speed, tick.held_direction) {
                (Some(speed), Some(direction)) => {
                    (Some(speed), Some(project(speed, direction, config.speed_deadband)))
                }
                _ => (None, None),
            };
            if let (Some(speed), Some(vector)) = (inst, vector) {
                reducer.add(speed, vector);
            }

            let windows = aggregator.push(inst, vector);
            rows.push(ReportRow {
                stamp,
                raw_speed: tick.raw_speed,
                raw_direction: tick.raw_direction,
                speed: inst,
                vector,
                windows,
            });

            if (idx + 1) % PROGRESS_STRIDE == 0 {
                progress((100 * (idx + 1) / total) as u8);
            }
        }
        progress(100);

        let day = day_start(grid.q_start() as f64 / TICKS_PER_SECOND);
        let summary = reducer.finish();
        let maxima = collect_maxima(&rows, &config.windows, &aggregator, summary);

        Ok(Self {
            day,
            windows: config.windows.clone(),
            rows,
            maxima,
            summary,
        })
    }
}

/// Midnight UTC of the day containing `stamp`.
fn day_start(stamp: f64) -> f64 {
    (stamp / SECONDS_PER_DAY).floor() * SECONDS_PER_DAY
}

/// Fixed-order maxima table: the instantaneous entry, one entry per window,
/// then the global average. Entries whose average never got computed stay
/// missing rather than zero.
fn collect_maxima(
    rows: &[ReportRow],
    windows: &[AveragingWindow],
    aggregator: &RollingAggregator,
    summary: Option<DaySummary>,
) -> Vec<MaxEntry> {
    let mut maxima = Vec::with_capacity(windows.len() + 2);

    maxima.push(match aggregator.instantaneous_max() {
        Some(max) => MaxEntry {
            label: "Max over 0.25s".to_string(),
            speed: Some(max.speed),
            direction: held_direction_at(rows, max.row),
            stamp: Some(MaxStamp::Tick(rows[max.row].stamp)),
        },
        None => MaxEntry::missing("Max over 0.25s".to_string()),
    });

    for (slot, (window, max)) in windows.iter().zip(aggregator.window_maxima()).enumerate() {
        let label = format!("Max over {}", window.label());
        maxima.push(match max {
            Some(RunningMax { row, .. }) => {
                let value = rows[row].windows[slot];
                MaxEntry {
                    label,
                    speed: value.speed,
                    direction: value.direction,
                    stamp: Some(MaxStamp::Tick(rows[row].stamp)),
                }
            }
            None => MaxEntry::missing(label),
        });
    }

    maxima.push(match summary {
        Some(summary) => MaxEntry {
            label: "Global average".to_string(),
            speed: Some(summary.speed),
            direction: Some(summary.direction),
            stamp: Some(MaxStamp::Day),
        },
        None => MaxEntry::missing("Global average".to_string()),
    });

    maxima
}

/// Last valid direction measure (degrees) at or before `row`; this is the
/// value the hold cursor carried there.
fn held_direction_at(rows: &[ReportRow], row: usize) -> Option<f64> {
    rows[..=row].iter().rev().find_map(|r| r.raw_direction)
}
