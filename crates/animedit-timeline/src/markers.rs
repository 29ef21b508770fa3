//! Keyframe marker placement.

use std::collections::HashSet;

use serde::Serialize;

use crate::coords::TimelineEngine;

/// A keyframe glyph on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyframeMarker {
    pub time: f64,
    pub x: f64,
}

/// Hash key with set semantics for times: `-0.0` equals `0.0` and every NaN
/// equals every other NaN.
fn time_key(time: f64) -> u64 {
    if time.is_nan() {
        f64::NAN.to_bits()
    } else {
        (time + 0.0).to_bits()
    }
}

/// Distinct times in order of first occurrence.
pub fn unique_times(times: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut seen = HashSet::new();
    times
        .into_iter()
        .filter(|t| seen.insert(time_key(*t)))
        .collect()
}

impl TimelineEngine {
    /// One marker per distinct keyframe time.
    ///
    /// Tracks keyed at the same instant share a single marker.
    pub fn place_keyframe_markers(
        &self,
        times: impl IntoIterator<Item = f64>,
    ) -> Vec<KeyframeMarker> {
        unique_times(times)
            .into_iter()
            .map(|time| KeyframeMarker {
                time,
                x: self.time_to_x(time),
            })
            .collect()
    }
}
