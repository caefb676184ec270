//! Rolling multi-window aggregation over the tick stream.
//!
//! Each configured window keeps an incremental running sum of speed and of
//! the vector components over its trailing span, updated in O(1) per tick by
//! adding the newest row and evicting the row that fell out. Full
//! re-summation would be O(window) per tick; the incremental sums agree with
//! it within floating-point rounding before the 4/1-decimal output rounding
//! is applied, and a per-window count of non-zero vectors keeps the
//! zero-sum case exact.

use crate::config::AveragingWindow;
use crate::constants::{DIRECTION_DECIMALS, SPEED_DECIMALS};
use crate::vector::{WindVector, round_to, vector_direction};

/// Per-window output at one grid tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowValue {
    /// Average speed over the trailing window (m/s, 4 decimals).
    pub speed: Option<f64>,
    /// Circular-mean direction over the trailing window
    /// (degrees in `[0, 360)`, 1 decimal).
    pub direction: Option<f64>,
}

/// Row index holding the largest value seen so far, plus that value.
/// Comparison is strict, so ties keep the earliest row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningMax {
    pub row: usize,
    pub speed: f64,
}

impl RunningMax {
    fn update(slot: &mut Option<RunningMax>, row: usize, speed: f64) {
        let replace = match slot {
            None => true,
            Some(current) => speed > current.speed,
        };
        if replace {
            *slot = Some(RunningMax { row, speed });
        }
    }
}

struct WindowState {
    window: AveragingWindow,
    sum_speed: f64,
    sum_x: f64,
    sum_y: f64,
    /// Non-zero vectors currently inside the window. When this reaches zero
    /// the vector sums are reset to cancel any eviction residue, so an
    /// all-calm window reports a zero sum exactly, as re-summation would.
    nonzero: usize,
    /// Direction reported at the previous tick, reused when the summed
    /// vector is zero (atan2(0, 0) has no meaning there).
    last_direction: Option<f64>,
    max: Option<RunningMax>,
}

impl WindowState {
    fn new(window: AveragingWindow) -> Self {
        Self {
            window,
            sum_speed: 0.0,
            sum_x: 0.0,
            sum_y: 0.0,
            nonzero: 0,
            last_direction: None,
            max: None,
        }
    }

    fn push(&mut self, row: usize, speeds: &[Option<f64>], xs: &[f64], ys: &[f64]) -> WindowValue {
        let len = self.window.ticks;

        self.sum_speed += speeds[row].unwrap_or(0.0);
        self.sum_x += xs[row];
        self.sum_y += ys[row];
        if xs[row] != 0.0 || ys[row] != 0.0 {
            self.nonzero += 1;
        }
        if row >= len {
            self.sum_speed -= speeds[row - len].unwrap_or(0.0);
            self.sum_x -= xs[row - len];
            self.sum_y -= ys[row - len];
            if xs[row - len] != 0.0 || ys[row - len] != 0.0 {
                self.nonzero -= 1;
            }
        }
        if self.nonzero == 0 {
            self.sum_x = 0.0;
            self.sum_y = 0.0;
        }

        // The trailing span is [row - len + 1, row]. It is fully populated
        // exactly when its left edge is: held values never revert to empty,
        // so checking the left edge alone decides the whole span.
        if row + 1 < len || speeds[row + 1 - len].is_none() {
            return WindowValue::default();
        }

        let speed = round_to(self.sum_speed / len as f64, SPEED_DECIMALS);
        let direction = if self.nonzero == 0 {
            self.last_direction
        } else {
            Some(round_to(
                vector_direction(self.sum_x, self.sum_y),
                DIRECTION_DECIMALS,
            ))
        };
        self.last_direction = direction;

        RunningMax::update(&mut self.max, row, speed);

        WindowValue {
            speed: Some(speed),
            direction,
        }
    }
}

/// Maintains all configured windows plus the instantaneous running max.
///
/// Rows are fed one at a time in grid order; the aggregator owns the arena of
/// past instantaneous values its windows evict from. All state is rebuilt per
/// export, so repeated runs over the same input are bit-identical.
pub struct RollingAggregator {
    windows: Vec<WindowState>,
    speeds: Vec<Option<f64>>,
    xs: Vec<f64>,
    ys: Vec<f64>,
    inst_max: Option<RunningMax>,
}

impl RollingAggregator {
    pub fn new(windows: &[AveragingWindow]) -> Self {
        Self {
            windows: windows.iter().copied().map(WindowState::new).collect(),
            speeds: Vec::new(),
            xs: Vec::new(),
            ys: Vec::new(),
            inst_max: None,
        }
    }

    /// Feed the next grid row and return each window's value for it.
    ///
    /// `speed` and `vector` are `None` until both sensors have produced a
    /// valid value; such rows contribute nothing and no window spans them.
    pub fn push(&mut self, speed: Option<f64>, vector: Option<WindVector>) -> Vec<WindowValue> {
        let row = self.speeds.len();
        self.speeds.push(speed);
        let vector = vector.unwrap_or(WindVector::ZERO);
        self.xs.push(vector.x);
        self.ys.push(vector.y);

        // The instantaneous stream is its own length-one window.
        if let Some(speed) = speed {
            RunningMax::update(&mut self.inst_max, row, speed);
        }

        let mut values = Vec::with_capacity(self.windows.len());
        for state in &mut self.windows {
            values.push(state.push(row, &self.speeds, &self.xs, &self.ys));
        }
        values
    }

    /// Running max of the instantaneous speed stream.
    pub fn instantaneous_max(&self) -> Option<RunningMax> {
        self.inst_max
    }

    /// Running max per window, in configured order.
    pub fn window_maxima(&self) -> Vec<Option<RunningMax>> {
        self.windows.iter().map(|w| w.max).collect()
    }
}
