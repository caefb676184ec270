use crate::constants::{DIRECTION_DECIMALS, SPEED_DECIMALS};
use crate::vector::{WindVector, round_to, vector_direction};

/// Whole-range average speed and circular-mean direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    /// Mean instantaneous speed (m/s, 4 decimals).
    pub speed: f64,
    /// Circular-mean direction (degrees in `[0, 360)`, 1 decimal).
    pub direction: f64,
}

/// Reduces every populated tick to the single global summary entry.
///
/// Unlike the per-window aggregation there is no carry-forward for a zero
/// net vector; the summary has no previous entry, so its direction is
/// reported as-is.
#[derive(Debug, Default)]
pub struct SummaryReducer {
    sum_speed: f64,
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl SummaryReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one populated tick.
    pub fn add(&mut self, speed: f64, vector: WindVector) {
        self.sum_speed += speed;
        self.sum_x += vector.x;
        self.sum_y += vector.y;
        self.count += 1;
    }

    /// Reduce to the summary; `None` when no tick was ever populated.
    pub fn finish(&self) -> Option<DaySummary> {
        if self.count == 0 {
            return None;
        }
        Some(DaySummary {
            speed: round_to(self.sum_speed / self.count as f64, SPEED_DECIMALS),
            direction: round_to(
                vector_direction(self.sum_x, self.sum_y),
                DIRECTION_DECIMALS,
            ),
        })
    }
}
