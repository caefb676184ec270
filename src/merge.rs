use crate::series::{Sample, SampleSeries};

/// Values produced for one grid tick by the merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickValues {
    /// Speed measure that landed on this tick, if any (m/s).
    pub raw_speed: Option<f64>,
    /// Direction measure that landed on this tick, if any (degrees).
    pub raw_direction: Option<f64>,
    /// Last valid speed seen so far (m/s).
    pub held_speed: Option<f64>,
    /// Last valid direction seen so far (radians).
    pub held_direction: Option<f64>,
}

/// Forward-only cursor over one sample sequence.
struct HoldCursor<'a> {
    samples: &'a [Sample],
    idx: usize,
}

impl<'a> HoldCursor<'a> {
    fn new(samples: &'a [Sample]) -> Self {
        Self { samples, idx: 0 }
    }

    /// Consume every sample starting at or before `stamp` and return the last
    /// valid value among them. Sentinel values advance the cursor without
    /// producing anything.
    fn advance(&mut self, stamp: f64) -> Option<f64> {
        let mut observed = None;
        while self.idx < self.samples.len() && self.samples[self.idx].start_time <= stamp {
            let sample = &self.samples[self.idx];
            if sample.is_valid() {
                observed = Some(sample.value);
            }
            self.idx += 1;
        }
        observed
    }
}

/// Merges the two irregular sample sequences onto the uniform grid.
///
/// Each series keeps its own monotonic cursor; the last valid value is carried
/// forward onto every new tick (zero-order hold). Ticks before the first valid
/// sample of a series hold nothing for it. Cursors never rewind, so a full
/// pass is O(ticks + samples).
pub struct MergeCursor<'a> {
    speed: HoldCursor<'a>,
    direction: HoldCursor<'a>,
    held_speed: Option<f64>,
    held_direction: Option<f64>,
}

impl<'a> MergeCursor<'a> {
    pub fn new(speed: &'a SampleSeries, direction: &'a SampleSeries) -> Self {
        Self {
            speed: HoldCursor::new(speed.samples()),
            direction: HoldCursor::new(direction.samples()),
            held_speed: None,
            held_direction: None,
        }
    }

    /// Advance both cursors to `stamp`. Stamps must be strictly increasing
    /// across calls.
    pub fn advance(&mut self, stamp: f64) -> TickValues {
        let raw_speed = self.speed.advance(stamp);
        if let Some(value) = raw_speed {
            self.held_speed = Some(value);
        }

        let raw_direction = self.direction.advance(stamp);
        if let Some(value) = raw_direction {
            // degrees to radians once per update, not per tick
            self.held_direction = Some(value.to_radians());
        }

        TickValues {
            raw_speed,
            raw_direction,
            held_speed: self.held_speed,
            held_direction: self.held_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(samples: &[(f64, f64, f64)]) -> SampleSeries {
        SampleSeries::new(
            samples
                .iter()
                .map(|&(s, e, v)| Sample::new(s, e, v))
                .collect(),
        )
    }

    #[test]
    fn test_hold_carries_last_value_forward() {
        let speed = series(&[(1.0, 2.0, 5.0)]);
        let direction = series(&[(0.0, 4.0, 90.0)]);
        let mut cursor = MergeCursor::new(&speed, &direction);

        let tick = cursor.advance(0.0);
        assert_eq!(tick.held_speed, None);
        assert_eq!(tick.raw_speed, None);

        let tick = cursor.advance(1.0);
        assert_eq!(tick.raw_speed, Some(5.0));
        assert_eq!(tick.held_speed, Some(5.0));

        // No new sample, the held value persists and raw stays empty.
        let tick = cursor.advance(2.0);
        assert_eq!(tick.raw_speed, None);
        assert_eq!(tick.held_speed, Some(5.0));
    }

    #[test]
    fn test_sentinel_consumes_cursor_without_update() {
        let speed = series(&[(0.0, 1.0, 5.0), (1.0, 2.0, -1.0), (2.0, 3.0, 7.0)]);
        let direction = series(&[(0.0, 3.0, 0.0)]);
        let mut cursor = MergeCursor::new(&speed, &direction);

        assert_eq!(cursor.advance(0.0).held_speed, Some(5.0));

        // The sentinel at t=1 is skipped, the previous value persists.
        let tick = cursor.advance(1.0);
        assert_eq!(tick.raw_speed, None);
        assert_eq!(tick.held_speed, Some(5.0));

        assert_eq!(cursor.advance(2.0).held_speed, Some(7.0));
    }

    #[test]
    fn test_last_sample_wins_on_shared_tick() {
        let speed = series(&[(0.0, 0.1, 3.0), (0.1, 0.2, 4.0)]);
        let direction = series(&[(0.0, 1.0, 0.0)]);
        let mut cursor = MergeCursor::new(&speed, &direction);

        let tick = cursor.advance(0.25);
        assert_eq!(tick.raw_speed, Some(4.0));
        assert_eq!(tick.held_speed, Some(4.0));
    }

    #[test]
    fn test_direction_held_in_radians() {
        let speed = series(&[(0.0, 1.0, 1.0)]);
        let direction = series(&[(0.0, 1.0, 180.0)]);
        let mut cursor = MergeCursor::new(&speed, &direction);

        let tick = cursor.advance(0.0);
        assert_eq!(tick.raw_direction, Some(180.0));
        assert!((tick.held_direction.unwrap() - std::f64::consts::PI).abs() < 1e-12);
    }
}
