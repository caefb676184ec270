use crate::constants::TICKS_PER_SECOND;
use crate::error::{Result, WindError};
use crate::series::SampleSeries;

/// Uniform quarter-second grid covering the union of both series' ranges.
///
/// Tick `q` is the absolute quarter-second index of the instant
/// `q / 4` seconds UTC; the grid spans `[q_start, q_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    q_start: i64,
    q_end: i64,
}

impl Grid {
    /// Determine grid bounds from the two sensors' recorded ranges.
    ///
    /// The grid starts at the earlier of the two first samples and ends at the
    /// later of the two last samples. Either series being empty is
    /// `WindError::InsufficientData`.
    pub fn from_series(speed: &SampleSeries, direction: &SampleSeries) -> Result<Self> {
        let (speed_start, speed_end) = bounds(speed, "speed")?;
        let (dir_start, dir_end) = bounds(direction, "direction")?;

        let start = speed_start.min(dir_start);
        let end = speed_end.max(dir_end);

        Ok(Self {
            q_start: (TICKS_PER_SECOND * start).round() as i64,
            q_end: (TICKS_PER_SECOND * end).round() as i64,
        })
    }

    pub fn q_start(&self) -> i64 {
        self.q_start
    }

    pub fn q_end(&self) -> i64 {
        self.q_end
    }

    /// Number of grid rows.
    pub fn len(&self) -> usize {
        (self.q_end - self.q_start).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.q_end <= self.q_start
    }

    /// Timestamp of row `idx`, in UTC epoch seconds.
    pub fn stamp(&self, idx: usize) -> f64 {
        (self.q_start + idx as i64) as f64 / TICKS_PER_SECOND
    }

    /// Row timestamps in grid order.
    pub fn stamps(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |idx| self.stamp(idx))
    }
}

fn bounds(series: &SampleSeries, name: &'static str) -> Result<(f64, f64)> {
    match (series.first_start(), series.last_end()) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(WindError::InsufficientData { series: name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Sample;

    fn series(start: f64, end: f64) -> SampleSeries {
        SampleSeries::new(vec![Sample::new(start, end, 1.0)])
    }

    #[test]
    fn test_bounds_union_of_both_ranges() {
        let speed = series(10.0, 20.0);
        let direction = series(12.0, 25.0);
        let grid = Grid::from_series(&speed, &direction).unwrap();
        assert_eq!(grid.q_start(), 40);
        assert_eq!(grid.q_end(), 100);
        assert_eq!(grid.len(), 60);
    }

    #[test]
    fn test_bounds_round_to_quarter_seconds() {
        let speed = series(0.1, 9.9);
        let direction = series(0.2, 9.8);
        let grid = Grid::from_series(&speed, &direction).unwrap();
        // 4 * 0.1 = 0.4 rounds to 0, 4 * 9.9 = 39.6 rounds to 40
        assert_eq!(grid.q_start(), 0);
        assert_eq!(grid.q_end(), 40);
    }

    #[test]
    fn test_empty_series_is_insufficient_data() {
        let speed = SampleSeries::default();
        let direction = series(0.0, 10.0);
        let err = Grid::from_series(&speed, &direction).unwrap_err();
        assert!(matches!(
            err,
            WindError::InsufficientData { series: "speed" }
        ));

        let err = Grid::from_series(&direction, &speed).unwrap_err();
        assert!(matches!(
            err,
            WindError::InsufficientData {
                series: "direction"
            }
        ));
    }

    #[test]
    fn test_stamps_step_by_quarter_second() {
        let speed = series(0.0, 1.0);
        let grid = Grid::from_series(&speed, &speed).unwrap();
        let stamps: Vec<f64> = grid.stamps().collect();
        assert_eq!(stamps, vec![0.0, 0.25, 0.5, 0.75]);
    }
}
