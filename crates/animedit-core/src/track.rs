//! Keyframe tracks.
//!
//! A track is a named channel of keyframed values. The editor core never
//! interprets the values: it only needs the track name (for display and
//! selection) and the keyframe times (for markers). Values are stored as a
//! flat `f32` buffer with a fixed stride per keyframe, the same layout glTF
//! animation samplers use.

use std::fmt;

use crate::error::{AnimEditError, Result};

/// A single named animation channel.
///
/// Keyframe times are kept sorted ascending and unique.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    /// Channel name, e.g. `"hips.quaternion"`.
    pub name: String,
    times: Vec<f64>,
    values: Vec<f32>,
    stride: usize,
}

impl KeyframeTrack {
    /// Create an empty track whose keyframes carry `stride` values each.
    pub fn new(name: impl Into<String>, stride: usize) -> Self {
        Self {
            name: name.into(),
            times: Vec::new(),
            values: Vec::new(),
            stride,
        }
    }

    /// Build a track from parallel time/value buffers.
    ///
    /// Times must be finite, non-negative and strictly increasing, and
    /// `values.len()` must equal `times.len() * stride`.
    pub fn from_buffers(
        name: impl Into<String>,
        times: Vec<f64>,
        values: Vec<f32>,
        stride: usize,
    ) -> Result<Self> {
        let name = name.into();
        if values.len() != times.len() * stride {
            return Err(AnimEditError::InvalidConfiguration(format!(
                "track '{}': {} values do not match {} keyframes of stride {}",
                name,
                values.len(),
                times.len(),
                stride
            )));
        }
        if let Some(bad) = times.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(AnimEditError::InvalidConfiguration(format!(
                "track '{name}': keyframe time {bad} is out of range"
            )));
        }
        if times.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AnimEditError::InvalidConfiguration(format!(
                "track '{name}': keyframe times must be strictly increasing"
            )));
        }
        Ok(Self {
            name,
            times,
            values,
            stride,
        })
    }

    /// Insert or overwrite the keyframe at `time`. Maintains sorted order.
    pub fn set(&mut self, time: f64, value: &[f32]) -> Result<()> {
        if !time.is_finite() || time < 0.0 {
            return Err(AnimEditError::InvalidConfiguration(format!(
                "track '{}': keyframe time {} is out of range",
                self.name, time
            )));
        }
        if value.len() != self.stride {
            return Err(AnimEditError::InvalidConfiguration(format!(
                "track '{}': expected {} values per keyframe, got {}",
                self.name,
                self.stride,
                value.len()
            )));
        }
        match self.times.binary_search_by(|t| t.total_cmp(&time)) {
            Ok(idx) => {
                let start = idx * self.stride;
                self.values[start..start + self.stride].copy_from_slice(value);
            }
            Err(idx) => {
                self.times.insert(idx, time);
                let start = idx * self.stride;
                self.values.splice(start..start, value.iter().copied());
            }
        }
        Ok(())
    }

    /// Remove the keyframe at the given time.
    pub fn remove(&mut self, time: f64) -> bool {
        if let Some(idx) = self.times.iter().position(|t| *t == time) {
            self.times.remove(idx);
            let start = idx * self.stride;
            self.values.drain(start..start + self.stride);
            true
        } else {
            false
        }
    }

    /// Keyframe times, ascending.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The value payload of keyframe `index`.
    pub fn value_at(&self, index: usize) -> Option<&[f32]> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.stride;
        self.values.get(start..start + self.stride)
    }

    /// Values per keyframe.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the track has no keyframes.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last keyframe, if any.
    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }
}

impl fmt::Display for KeyframeTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyframeTrack({}, {} keyframes)", self.name, self.times.len())
    }
}
