//! Mapping between timeline seconds and horizontal pixels.
//!
//! Time maps to x linearly with `pixels_per_second`, origin at t = 0.
//! Pointer positions coming back from the view are clamped into
//! `[0, duration]`; times the host drives itself (the playhead) are not.

use animedit_core::error::ensure_duration;
use animedit_core::{AnimEditError, Result, TimelineConfig};
use tracing::trace;

/// The timeline coordinate engine.
///
/// Holds only validated configuration. Every operation takes the duration it
/// needs as an argument, so a clip swapped between two calls is always seen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineEngine {
    config: TimelineConfig,
}

impl TimelineEngine {
    /// Create an engine, rejecting non-positive scale or tick interval.
    pub fn new(config: TimelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[inline]
    pub fn pixels_per_second(&self) -> f64 {
        self.config.pixels_per_second
    }

    /// Seconds to pixels.
    #[inline]
    pub fn time_to_x(&self, time: f64) -> f64 {
        time * self.config.pixels_per_second
    }

    /// Pixels to seconds, clamped into `[0, duration]`.
    ///
    /// Any pointer position, including ones left of the timeline or past its
    /// rendered width, yields a time inside the clip.
    pub fn x_to_time(&self, x: f64, duration: f64) -> Result<f64> {
        ensure_duration(duration)?;
        if x.is_nan() {
            return Err(AnimEditError::InvalidConfiguration(
                "pointer position is not a number".into(),
            ));
        }
        let raw = x / self.config.pixels_per_second;
        let time = raw.clamp(0.0, duration);
        if time != raw {
            trace!(x, raw, time, duration, "Clamped pointer time");
        }
        Ok(time)
    }

    /// X position of the playhead. Not clamped: a host driving time outside
    /// the clip sees it drawn outside the clip.
    #[inline]
    pub fn place_playhead(&self, current_time: f64) -> f64 {
        self.time_to_x(current_time)
    }

    /// Rendered width of a clip of `duration` seconds.
    pub fn total_width(&self, duration: f64) -> Result<f64> {
        ensure_duration(duration)?;
        Ok(self.time_to_x(duration))
    }
}
