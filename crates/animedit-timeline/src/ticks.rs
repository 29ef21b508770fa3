//! Ruler tick generation.
//!
//! Majors sit at every multiple of the major interval from 0 up to the last
//! multiple not past the clip end. Between two consecutive majors the
//! configured number of minors are spaced evenly; nothing follows the last
//! major. Ticks come out in increasing time order.

use std::iter::FusedIterator;

use animedit_core::error::ensure_duration;
use animedit_core::{AnimEditError, Result};
use serde::Serialize;

use crate::coords::TimelineEngine;

/// One ruler mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    /// Position in seconds.
    pub time: f64,
    pub is_major: bool,
}

impl Tick {
    /// Caption drawn next to major ticks, e.g. `"2s"` or `"2.5s"`.
    pub fn label(&self) -> Option<String> {
        self.is_major.then(|| format!("{}s", self.time))
    }
}

/// Lazy, restartable tick sequence for one duration.
///
/// A clone continues from the same position; call
/// [`TimelineEngine::generate_ticks`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Ticks {
    interval: f64,
    minors: u32,
    spacing: f64,
    /// Index of the last major tick.
    last_major: u64,
    major: u64,
    /// 0 = the major itself, 1..=minors = the minors after it.
    step: u32,
    done: bool,
}

impl Ticks {
    /// Largest number of ticks a single sequence may yield.
    pub const MAX_TICKS: u64 = 1 << 24;

    /// Tick sequence for `duration` seconds, or `InvalidConfiguration` when
    /// the duration is invalid or the sequence would exceed [`Self::MAX_TICKS`].
    pub(crate) fn new(interval: f64, minors: u32, duration: f64) -> Result<Self> {
        ensure_duration(duration)?;
        let gaps = (duration / interval).floor();
        let total = if gaps < Self::MAX_TICKS as f64 {
            (gaps as u64)
                .checked_mul(u64::from(minors) + 1)
                .and_then(|n| n.checked_add(1))
                .filter(|&n| n <= Self::MAX_TICKS)
        } else {
            None
        };
        if total.is_none() {
            return Err(AnimEditError::InvalidConfiguration(format!(
                "{duration}s at {interval}s per major with {minors} minors needs more than {} ticks",
                Self::MAX_TICKS
            )));
        }
        Ok(Self {
            interval,
            minors,
            spacing: interval / (f64::from(minors) + 1.0),
            last_major: gaps as u64,
            major: 0,
            step: 0,
            done: false,
        })
    }

    /// Number of major ticks the sequence yields in total.
    pub fn major_count(&self) -> u64 {
        self.last_major + 1
    }

    fn remaining(&self) -> u64 {
        if self.done {
            return 0;
        }
        let per_gap = u64::from(self.minors) + 1;
        // Ticks still ahead in full gaps, plus the final major. Bounded by
        // MAX_TICKS at construction.
        let full = (self.last_major - self.major) * per_gap + 1;
        full - u64::from(self.step)
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.done {
            return None;
        }
        let base = self.major as f64 * self.interval;
        let tick = if self.step == 0 {
            Tick {
                time: base,
                is_major: true,
            }
        } else {
            Tick {
                time: base + f64::from(self.step) * self.spacing,
                is_major: false,
            }
        };

        if self.major == self.last_major {
            self.done = true;
        } else if self.step == self.minors {
            self.major += 1;
            self.step = 0;
        } else {
            self.step += 1;
        }
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl FusedIterator for Ticks {}

impl TimelineEngine {
    /// Ruler ticks for a clip of `duration` seconds.
    pub fn generate_ticks(&self, duration: f64) -> Result<Ticks> {
        let config = self.config();
        Ticks::new(
            config.major_tick_interval_seconds,
            config.minor_ticks_per_major,
            duration,
        )
    }
}
