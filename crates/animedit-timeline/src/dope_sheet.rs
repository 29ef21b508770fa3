//! Dope sheet geometry.
//!
//! The dope sheet is a scrollable grid: a track-name column on the left, a
//! seconds ruler on top, and one row of keyframe markers per track. Rows are
//! laid out top to bottom in clip order, `track_height` pixels each, in grid
//! space (the ruler is not part of the grid).

use animedit_core::{AnimationClip, DopeSheetLayout, KeyframeTrack, Result};
use serde::Serialize;

use crate::coords::TimelineEngine;
use crate::markers::KeyframeMarker;
use crate::ticks::Ticks;

/// One track row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DopeSheetRow {
    pub name: String,
    pub top: f64,
    /// Every keyframe of this track. Unlike the summary timeline, rows are
    /// not merged across tracks.
    pub markers: Vec<KeyframeMarker>,
}

/// Scroll offsets the ruler and the name column must adopt to stay aligned
/// with the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollSync {
    pub ruler_scroll_left: f64,
    pub track_list_scroll_top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DopeSheet {
    engine: TimelineEngine,
    layout: DopeSheetLayout,
}

impl DopeSheet {
    pub fn new(engine: TimelineEngine, layout: DopeSheetLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { engine, layout })
    }

    pub fn layout(&self) -> &DopeSheetLayout {
        &self.layout
    }

    pub fn total_height(&self, track_count: usize) -> f64 {
        track_count as f64 * self.layout.track_height
    }

    pub fn row_top(&self, index: usize) -> f64 {
        index as f64 * self.layout.track_height
    }

    /// Row under a grid-space y coordinate.
    pub fn row_at_y(&self, y: f64, track_count: usize) -> Option<usize> {
        if y.is_nan() || y < 0.0 {
            return None;
        }
        let row = (y / self.layout.track_height).floor() as usize;
        (row < track_count).then_some(row)
    }

    /// Whole-second ruler marks, `0s` through `floor(duration)s`.
    pub fn ruler(&self, duration: f64) -> Result<Ticks> {
        Ticks::new(1.0, 0, duration)
    }

    pub fn row_markers(&self, track: &KeyframeTrack) -> Vec<KeyframeMarker> {
        track
            .times()
            .iter()
            .map(|&time| KeyframeMarker {
                time,
                x: self.engine.time_to_x(time),
            })
            .collect()
    }

    pub fn rows(&self, clip: &AnimationClip) -> Vec<DopeSheetRow> {
        clip.tracks()
            .iter()
            .enumerate()
            .map(|(i, track)| DopeSheetRow {
                name: track.name.clone(),
                top: self.row_top(i),
                markers: self.row_markers(track),
            })
            .collect()
    }

    /// Time under a click in the grid.
    ///
    /// `client_x` and `grid_left` are viewport coordinates; the grid's own
    /// horizontal scroll is added back before clamping.
    pub fn pointer_to_time(
        &self,
        client_x: f64,
        grid_left: f64,
        scroll_left: f64,
        duration: f64,
    ) -> Result<f64> {
        self.engine
            .x_to_time(client_x - grid_left + scroll_left, duration)
    }

    pub fn sync_scroll(&self, grid_scroll_left: f64, grid_scroll_top: f64) -> ScrollSync {
        ScrollSync {
            ruler_scroll_left: grid_scroll_left,
            track_list_scroll_top: grid_scroll_top,
        }
    }
}
