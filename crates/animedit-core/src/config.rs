//! Editor configuration.
//!
//! Every knob has a default matching the stock animation editor (60 px per
//! second, one major tick per second with four minors between, 24 px track
//! rows). Hosts may override any subset from JSON; missing fields fall back
//! to the defaults and the result is validated before use.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_positive, AnimEditError, Result};

/// Scale and ruler settings of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Horizontal pixels per second of animation.
    pub pixels_per_second: f64,
    /// Seconds between labelled major ticks.
    pub major_tick_interval_seconds: f64,
    /// Unlabelled ticks between two consecutive majors.
    pub minor_ticks_per_major: u32,
}

impl TimelineConfig {
    pub const DEFAULT_PIXELS_PER_SECOND: f64 = 60.0;
    pub const DEFAULT_MAJOR_TICK_INTERVAL: f64 = 1.0;
    pub const DEFAULT_MINOR_TICKS: u32 = 4;

    pub fn validate(&self) -> Result<()> {
        ensure_positive("pixels_per_second", self.pixels_per_second)?;
        ensure_positive(
            "major_tick_interval_seconds",
            self.major_tick_interval_seconds,
        )
    }

    /// Distance in seconds between two adjacent ticks of any kind.
    pub fn minor_spacing(&self) -> f64 {
        self.major_tick_interval_seconds / (f64::from(self.minor_ticks_per_major) + 1.0)
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            pixels_per_second: Self::DEFAULT_PIXELS_PER_SECOND,
            major_tick_interval_seconds: Self::DEFAULT_MAJOR_TICK_INTERVAL,
            minor_ticks_per_major: Self::DEFAULT_MINOR_TICKS,
        }
    }
}

/// Pixel geometry of the dope sheet grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DopeSheetLayout {
    pub track_height: f64,
    pub ruler_height: f64,
    pub track_name_width: f64,
}

impl DopeSheetLayout {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("track_height", self.track_height)?;
        ensure_positive("ruler_height", self.ruler_height)?;
        ensure_positive("track_name_width", self.track_name_width)
    }
}

impl Default for DopeSheetLayout {
    fn default() -> Self {
        Self {
            track_height: 24.0,
            ruler_height: 30.0,
            track_name_width: 200.0,
        }
    }
}

/// What the track selection does when its track disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Keep the selection while the track exists, otherwise select nothing.
    #[default]
    KeepOrClear,
    /// Fall back to the first track of the new list.
    DefaultToFirst,
}

/// Complete editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub timeline: TimelineConfig,
    pub dope_sheet: DopeSheetLayout,
    pub selection: SelectionPolicy,
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        self.timeline.validate()?;
        self.dope_sheet.validate()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data)
            .map_err(|e| AnimEditError::Serialization(format!("Invalid editor config: {}", e)))?;
        config.validate()?;
        debug!(?config, "Loaded editor config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AnimEditError::Serialization(format!("Failed to serialize config: {}", e)))
    }
}
