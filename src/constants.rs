//! Numeric constants for the aggregation grid and report formatting.

/// Grid resolution: number of output slots per second (quarter-second grid).
pub const TICKS_PER_SECOND: f64 = 4.0;

/// Wind speeds below this (m/s) contribute a zero vector.
/// At near-calm the vane reading is dominated by noise and would otherwise
/// drag the circular mean toward an arbitrary heading.
pub const SPEED_DEADBAND: f64 = 0.05;

/// Conversion factor from m/s to km/h in rendered reports.
pub const MS_TO_KMH: f64 = 3.6;

/// Length of one export day in seconds.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Grid rows between two progress callback invocations.
pub const PROGRESS_STRIDE: usize = 512;

/// Decimal places kept for speeds and vector components.
pub const SPEED_DECIMALS: u32 = 4;

/// Decimal places kept for directions.
pub const DIRECTION_DECIMALS: u32 = 1;
