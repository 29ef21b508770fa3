//! Animation clips.

use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use crate::error::{ensure_duration, AnimEditError, Result};
use crate::track::KeyframeTrack;

/// Identity of a loaded clip.
///
/// Two loads of the same file produce different ids, so the editor can tell
/// "a new clip arrived" apart from "the same clip was re-rendered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(pub Uuid);

impl ClipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named collection of tracks sharing one timeline.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub id: ClipId,
    pub name: String,
    duration: f64,
    tracks: Vec<KeyframeTrack>,
}

impl AnimationClip {
    /// Create a clip whose duration is the latest keyframe time of any track.
    pub fn new(name: impl Into<String>, tracks: Vec<KeyframeTrack>) -> Result<Self> {
        let duration = tracks
            .iter()
            .filter_map(KeyframeTrack::last_time)
            .fold(0.0, f64::max);
        Self::with_duration(name, duration, tracks)
    }

    /// Create a clip with an explicit duration in seconds.
    ///
    /// Fails if the duration is negative, a keyframe lies past it, or two
    /// tracks share a name.
    pub fn with_duration(
        name: impl Into<String>,
        duration: f64,
        tracks: Vec<KeyframeTrack>,
    ) -> Result<Self> {
        ensure_duration(duration)?;
        for track in &tracks {
            if let Some(last) = track.last_time().filter(|&t| t > duration) {
                return Err(AnimEditError::InvalidConfiguration(format!(
                    "track {} has a keyframe at {last}s past the {duration}s clip end",
                    track.name
                )));
            }
        }
        ensure_unique_names(tracks.iter().map(|t| t.name.as_str()))?;
        Ok(Self {
            id: ClipId::new(),
            name: name.into(),
            duration,
            tracks,
        })
    }

    /// Give an unnamed clip the name of the file it was loaded from.
    pub fn or_name_from_file(mut self, file_name: &str) -> Self {
        if self.name.is_empty() {
            self.name = name_from_file(file_name).to_string();
        }
        self
    }

    /// Clip length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn tracks(&self) -> &[KeyframeTrack] {
        &self.tracks
    }

    /// Look up a track by name.
    pub fn track(&self, name: &str) -> Option<&KeyframeTrack> {
        self.tracks.iter().find(|t| t.name == name)
    }

    /// Track names in clip order.
    pub fn track_names(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.name.clone()).collect()
    }

    /// Every keyframe time of every track, in track order.
    ///
    /// Times shared between tracks appear once per track; marker placement
    /// collapses them.
    pub fn keyframe_times(&self) -> Vec<f64> {
        self.tracks
            .iter()
            .flat_map(|t| t.times().iter().copied())
            .collect()
    }
}

impl fmt::Display for AnimationClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnimationClip({}, {:.3}s, {} tracks)",
            self.name,
            self.duration,
            self.tracks.len()
        )
    }
}

/// Strip the final extension from a file name.
///
/// `"wave.vrma"` becomes `"wave"`, `"a.b.vrma"` becomes `"a.b"`; names without
/// an extension (or ending in a bare dot) are returned unchanged.
pub fn name_from_file(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) => {
            let ext = &file_name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name
            } else {
                &file_name[..dot]
            }
        }
        None => file_name,
    }
}

/// Fail with [`AnimEditError::DuplicateTrack`] on the first repeated name.
pub fn ensure_unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(AnimEditError::DuplicateTrack(name.to_string()));
        }
    }
    Ok(())
}
