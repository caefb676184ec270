//! Configuration for the wind report exporter.
//!
//! `ExportConfig::default()` matches the Gill anemometer deployment: nine
//! averaging windows from half a second to ten minutes on a quarter-second
//! grid. A TOML file can override the window set and the vector deadband:
//!
//! ```toml
//! windows = [2, 4, 240]
//! speed_deadband = 0.1
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{SPEED_DEADBAND, TICKS_PER_SECOND};
use crate::error::{Result, WindError};

/// Default averaging windows in grid ticks:
/// 0.5s, 1s, 2s, 2.5s, 3s, 1min, 2min, 5min, 10min.
pub const DEFAULT_WINDOW_TICKS: [usize; 9] = [2, 4, 8, 10, 12, 240, 480, 1200, 2400];

/// One trailing averaging window, measured in grid ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AveragingWindow {
    pub ticks: usize,
}

impl AveragingWindow {
    pub fn new(ticks: usize) -> Self {
        Self { ticks }
    }

    /// Window length in seconds.
    pub fn seconds(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_SECOND
    }

    /// Human label: seconds below one minute ("0.5s", "3s"), whole minutes
    /// above ("2min").
    pub fn label(&self) -> String {
        let secs = self.seconds();
        if secs < 60.0 {
            if secs.fract() == 0.0 {
                format!("{}s", secs as u64)
            } else {
                format!("{secs}s")
            }
        } else {
            format!("{}min", (secs / 60.0).round() as u64)
        }
    }
}

impl fmt::Display for AveragingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Exporter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Averaging window lengths in grid ticks, shortest first.
    pub windows: Vec<AveragingWindow>,
    /// Speeds below this produce a zero wind vector (m/s).
    pub speed_deadband: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            windows: DEFAULT_WINDOW_TICKS.map(AveragingWindow::new).to_vec(),
            speed_deadband: SPEED_DEADBAND,
        }
    }
}

impl ExportConfig {
    /// Load configuration overrides from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: ExportConfig =
            toml::from_str(&text).map_err(|e| WindError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(window) = self.windows.iter().find(|w| w.ticks == 0) {
            return Err(WindError::Config(format!(
                "averaging window must span at least one tick, got {}",
                window.ticks
            )));
        }
        Ok(())
    }
}
