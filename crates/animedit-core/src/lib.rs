//! AnimEdit Core - Foundation types for the animation editor
//!
//! This crate provides the types shared by the editor crates:
//! - Error taxonomy (AnimEditError)
//! - Timeline, dope sheet and selection configuration
//! - Animation clips and their keyframe tracks

pub mod clip;
pub mod config;
pub mod error;
pub mod track;

pub use clip::{name_from_file, AnimationClip, ClipId};
pub use config::{DopeSheetLayout, EditorConfig, SelectionPolicy, TimelineConfig};
pub use error::{AnimEditError, Result};
pub use track::KeyframeTrack;
