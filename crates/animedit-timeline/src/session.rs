//! Editor session: the host-facing side of the timeline.
//!
//! The session mirrors what the host hands it (clip identity, duration,
//! keyframe times, track names, playhead) and turns pointer input into
//! [`TimelineEvent`]s. It never changes the playhead on its own; the host
//! folds `TimeChanged` back in with [`EditorSession::set_current_time`].

use animedit_core::{AnimationClip, ClipId, EditorConfig, Result};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::coords::TimelineEngine;
use crate::dope_sheet::DopeSheet;
use crate::markers::KeyframeMarker;
use crate::selection::TrackSelection;
use crate::ticks::Tick;

/// Notifications for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEvent {
    /// A pointer interaction finished on this (clamped) time.
    TimeChanged(f64),
    /// The user picked a different track.
    TrackSelected(String),
}

pub type Events = SmallVec<[TimelineEvent; 4]>;

/// Everything a view needs to draw the summary timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame {
    pub width: f64,
    pub ticks: Vec<Tick>,
    pub markers: Vec<KeyframeMarker>,
    pub playhead_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    last_time: f64,
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    engine: TimelineEngine,
    dope_sheet: DopeSheet,
    selection: TrackSelection,
    clip_id: Option<ClipId>,
    duration: f64,
    keyframe_times: Vec<f64>,
    current_time: f64,
    drag: Option<Drag>,
    outbox: Events,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Result<Self> {
        let engine = TimelineEngine::new(config.timeline)?;
        let dope_sheet = DopeSheet::new(engine, config.dope_sheet)?;
        Ok(Self {
            engine,
            dope_sheet,
            selection: TrackSelection::new(config.selection),
            clip_id: None,
            duration: 0.0,
            keyframe_times: Vec::new(),
            current_time: 0.0,
            drag: None,
            outbox: Events::new(),
        })
    }

    pub fn engine(&self) -> &TimelineEngine {
        &self.engine
    }

    pub fn dope_sheet(&self) -> &DopeSheet {
        &self.dope_sheet
    }

    pub fn selection(&self) -> &TrackSelection {
        &self.selection
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn clip_id(&self) -> Option<ClipId> {
        self.clip_id
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Adopt the data of `clip`.
    ///
    /// A different clip resets the selection and the playhead; reloading the
    /// same clip keeps both where the new track list allows. A drag in
    /// progress continues against the new duration.
    pub fn load_clip(&mut self, clip: &AnimationClip) -> Result<()> {
        let names = clip.track_names();
        if self.clip_id == Some(clip.id) {
            self.selection.set_tracks(names)?;
        } else {
            self.selection.reset_for_clip(names)?;
            self.clip_id = Some(clip.id);
            self.current_time = 0.0;
            info!(clip = %clip.name, id = %clip.id, duration = clip.duration(), "Loaded clip");
        }
        self.duration = clip.duration();
        self.keyframe_times = clip.keyframe_times();
        Ok(())
    }

    /// Host-driven playhead (playback, undo, ...). Stored as given.
    pub fn set_current_time(&mut self, time: f64) {
        self.current_time = time;
    }

    /// A click on the timeline at pixel `x`.
    pub fn click(&mut self, x: f64) -> Result<f64> {
        let time = self.engine.x_to_time(x, self.duration)?;
        self.emit_time(time);
        Ok(time)
    }

    /// A click inside the scrolled dope sheet grid.
    pub fn click_grid(&mut self, client_x: f64, grid_left: f64, scroll_left: f64) -> Result<f64> {
        let time = self
            .dope_sheet
            .pointer_to_time(client_x, grid_left, scroll_left, self.duration)?;
        self.emit_time(time);
        Ok(time)
    }

    /// Start a scrub. Returns the preview time under the pointer.
    pub fn pointer_down(&mut self, x: f64) -> Result<f64> {
        let time = self.engine.x_to_time(x, self.duration)?;
        self.drag = Some(Drag { last_time: time });
        Ok(time)
    }

    /// Continue a scrub. `None` when no scrub is in progress.
    pub fn pointer_move(&mut self, x: f64) -> Result<Option<f64>> {
        if self.drag.is_none() {
            return Ok(None);
        }
        let time = self.engine.x_to_time(x, self.duration)?;
        self.drag = Some(Drag { last_time: time });
        Ok(Some(time))
    }

    /// Finish a scrub, emitting one `TimeChanged` for the release point.
    pub fn pointer_up(&mut self, x: f64) -> Result<Option<f64>> {
        if self.drag.is_none() {
            return Ok(None);
        }
        let time = self.engine.x_to_time(x, self.duration)?;
        self.drag = None;
        self.emit_time(time);
        Ok(Some(time))
    }

    /// Abandon a scrub without notifying the host. Returns the last preview
    /// time, if a scrub was in progress.
    pub fn cancel_drag(&mut self) -> Option<f64> {
        self.drag.take().map(|d| d.last_time)
    }

    /// User picked a track by name.
    ///
    /// Emits `TrackSelected` only when the selection actually changed.
    pub fn select_track(&mut self, name: &str) -> Result<bool> {
        let changed = self.selection.select(name)?;
        if changed {
            debug!(track = %name, "Track selected");
            self.outbox.push(TimelineEvent::TrackSelected(name.to_string()));
        }
        Ok(changed)
    }

    /// User clicked a dope sheet row at grid-space `y`. Clicks below the last
    /// row are ignored.
    pub fn click_track_row(&mut self, y: f64) -> Result<bool> {
        let count = self.selection.tracks().len();
        match self.dope_sheet.row_at_y(y, count) {
            Some(row) => {
                let name = self.selection.tracks()[row].clone();
                self.select_track(&name)
            }
            None => Ok(false),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drain pending notifications in the order they were produced.
    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.outbox)
    }

    /// Current summary timeline projection.
    pub fn frame(&self) -> Result<TimelineFrame> {
        Ok(TimelineFrame {
            width: self.engine.total_width(self.duration)?,
            ticks: self.engine.generate_ticks(self.duration)?.collect(),
            markers: self
                .engine
                .place_keyframe_markers(self.keyframe_times.iter().copied()),
            playhead_x: self.engine.place_playhead(self.current_time),
        })
    }

    fn emit_time(&mut self, time: f64) {
        debug!(time, "Time changed");
        self.outbox.push(TimelineEvent::TimeChanged(time));
    }
}
