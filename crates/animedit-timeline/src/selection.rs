//! Track selection registry.
//!
//! Holds the ordered track names of the loaded clip and at most one selected
//! name. The selection never points at a track that is not in the list.

use animedit_core::clip::ensure_unique_names;
use animedit_core::{AnimEditError, Result, SelectionPolicy};
use tracing::{debug, warn};

/// Observable state of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState<'a> {
    Unselected,
    Selected(&'a str),
}

#[derive(Debug, Clone, Default)]
pub struct TrackSelection {
    tracks: Vec<String>,
    selected: Option<String>,
    policy: SelectionPolicy,
}

impl TrackSelection {
    /// Empty registry, `Unselected`.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            tracks: Vec::new(),
            selected: None,
            policy,
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn state(&self) -> SelectionState<'_> {
        match &self.selected {
            Some(name) => SelectionState::Selected(name),
            None => SelectionState::Unselected,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tracks.iter().any(|t| t == name)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }

    /// Replace the track list of the current clip.
    ///
    /// A selection whose track survives is kept. Otherwise it is cleared, or
    /// moved to the first track under [`SelectionPolicy::DefaultToFirst`].
    /// Duplicate names leave the registry untouched.
    pub fn set_tracks(&mut self, tracks: Vec<String>) -> Result<()> {
        ensure_unique_names(tracks.iter().map(String::as_str))?;
        self.tracks = tracks;
        let survives = self
            .selected
            .as_deref()
            .is_some_and(|name| self.tracks.iter().any(|t| t == name));
        if !survives {
            if let Some(lost) = &self.selected {
                debug!(track = %lost, "Selected track vanished from track list");
            }
            self.selected = self.fallback();
        }
        Ok(())
    }

    /// Load the tracks of a different clip. The old selection is dropped even
    /// if the new clip has a track of the same name.
    pub fn reset_for_clip(&mut self, tracks: Vec<String>) -> Result<()> {
        ensure_unique_names(tracks.iter().map(String::as_str))?;
        self.tracks = tracks;
        self.selected = self.fallback();
        Ok(())
    }

    /// Select `name`.
    ///
    /// Returns `Ok(true)` when the selection changed and `Ok(false)` when
    /// `name` was already selected. Unknown names fail with
    /// [`AnimEditError::NotFound`] and leave the selection as it was.
    pub fn select(&mut self, name: &str) -> Result<bool> {
        if !self.contains(name) {
            warn!(track = %name, "Cannot select unknown track");
            return Err(AnimEditError::NotFound(name.to_string()));
        }
        if self.is_selected(name) {
            return Ok(false);
        }
        self.selected = Some(name.to_string());
        Ok(true)
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    fn fallback(&self) -> Option<String> {
        match self.policy {
            SelectionPolicy::KeepOrClear => None,
            SelectionPolicy::DefaultToFirst => self.tracks.first().cloned(),
        }
    }
}
