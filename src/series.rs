use serde::{Deserialize, Serialize};

/// One datalogger measure: the sensor's average reading over
/// `[start_time, end_time]`, timestamps in UTC epoch seconds.
///
/// A negative value is the datalogger's "no reading" sentinel; it is skipped
/// during resampling and the previous valid value persists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub start_time: f64,
    pub end_time: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(start_time: f64, end_time: f64, value: f64) -> Self {
        Self {
            start_time,
            end_time,
            value,
        }
    }

    /// Whether the value is an actual reading rather than the sentinel.
    pub fn is_valid(&self) -> bool {
        self.value >= 0.0
    }
}

/// An ordered sequence of samples recorded by one sensor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Build a series from raw samples, ordering them by start time.
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Start of the first sample, if any.
    pub fn first_start(&self) -> Option<f64> {
        self.samples.first().map(|s| s.start_time)
    }

    /// End of the last sample, if any.
    pub fn last_end(&self) -> Option<f64> {
        self.samples.last().map(|s| s.end_time)
    }

    /// Restrict the series to samples starting inside `[from, to)`.
    pub fn clip(&self, from: f64, to: f64) -> SampleSeries {
        SampleSeries {
            samples: self
                .samples
                .iter()
                .filter(|s| s.start_time >= from && s.start_time < to)
                .copied()
                .collect(),
        }
    }
}
