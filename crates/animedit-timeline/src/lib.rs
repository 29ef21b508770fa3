//! AnimEdit Timeline - Timeline coordinate engine and track selection
//!
//! Implements the scrubbing side of the animation editor:
//! - Seconds/pixel mapping with clamped pointer input
//! - Ruler tick generation and keyframe marker placement
//! - Dope sheet row layout
//! - Track selection that survives clip reloads
//! - An editor session that turns pointer input into host events

pub mod coords;
pub mod dope_sheet;
pub mod markers;
pub mod selection;
pub mod session;
pub mod ticks;

pub use coords::TimelineEngine;
pub use dope_sheet::{DopeSheet, DopeSheetRow, ScrollSync};
pub use markers::{unique_times, KeyframeMarker};
pub use selection::{SelectionState, TrackSelection};
pub use session::{EditorSession, Events, TimelineEvent, TimelineFrame};
pub use ticks::{Tick, Ticks};
