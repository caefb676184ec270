//! Seeded synthetic wind data for tests and demo exports.
//!
//! Speed follows a mean-reverting random walk with Gaussian gusts, direction
//! a slow drift around a prevailing heading. Both series emit the negative
//! sentinel for a configurable fraction of readings, like a real datalogger
//! with occasional dropped measures.

use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, WindError};
use crate::series::{Sample, SampleSeries};

/// Parameters for one synthetic day.
#[derive(Debug, Clone)]
pub struct WindDayConfig {
    /// Day start, UTC epoch seconds.
    pub day: f64,
    /// Covered span in seconds (a full day by default).
    pub duration: f64,
    pub seed: u64,
    /// Prevailing wind speed in m/s.
    pub mean_speed: f64,
    /// Gust standard deviation in m/s.
    pub speed_sigma: f64,
    /// Prevailing direction in degrees.
    pub mean_direction: f64,
    /// Direction drift standard deviation in degrees per sample.
    pub direction_sigma: f64,
    /// Sampling interval in seconds.
    pub interval: f64,
    /// Fraction of readings emitted as the sentinel, in [0, 1].
    pub dropout: f64,
}

impl Default for WindDayConfig {
    fn default() -> Self {
        Self {
            day: 0.0,
            duration: 86_400.0,
            seed: 1,
            mean_speed: 4.0,
            speed_sigma: 0.8,
            mean_direction: 225.0,
            direction_sigma: 3.0,
            interval: 1.0,
            dropout: 0.01,
        }
    }
}

/// Generate the speed series for one synthetic day.
pub fn generate_speed_series(config: &WindDayConfig) -> Result<SampleSeries> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let gusts = Normal::new(0.0, config.speed_sigma)
        .map_err(|e| WindError::Config(format!("speed_sigma: {e}")))?;

    let mut state = config.mean_speed;
    let samples = sample_times(config)
        .map(|start| {
            state += gusts.sample(&mut rng) - 0.1 * (state - config.mean_speed);
            state = state.max(0.0);
            let value = if rng.random::<f64>() < config.dropout {
                -1.0
            } else {
                state
            };
            Sample::new(start, start + config.interval, value)
        })
        .collect();

    Ok(SampleSeries::new(samples))
}

/// Generate the direction series for one synthetic day.
///
/// A different stream than the speed series (seed + 1), so the two series
/// drop readings independently.
pub fn generate_direction_series(config: &WindDayConfig) -> Result<SampleSeries> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1));
    let drift = Normal::new(0.0, config.direction_sigma)
        .map_err(|e| WindError::Config(format!("direction_sigma: {e}")))?;

    let mut state = config.mean_direction;
    let samples = sample_times(config)
        .map(|start| {
            state = (state + drift.sample(&mut rng)).rem_euclid(360.0);
            let value = if rng.random::<f64>() < config.dropout {
                -1.0
            } else {
                state
            };
            Sample::new(start, start + config.interval, value)
        })
        .collect();

    Ok(SampleSeries::new(samples))
}

fn sample_times(config: &WindDayConfig) -> impl Iterator<Item = f64> + '_ {
    let count = (config.duration / config.interval).floor() as usize;
    (0..count).map(move |i| config.day + i as f64 * config.interval)
}
