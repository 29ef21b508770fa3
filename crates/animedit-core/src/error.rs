//! Error types for AnimEdit.

use thiserror::Error;

/// Main error type for AnimEdit operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimEditError {
    /// Geometry or layout parameters the engine cannot work with
    /// (non-positive scale, negative duration, NaN input).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Track not found: {0}")]
    NotFound(String),

    #[error("Duplicate track name: {0}")]
    DuplicateTrack(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for AnimEdit operations.
pub type Result<T> = std::result::Result<T, AnimEditError>;

/// Reject a duration the timeline cannot lay out.
pub fn ensure_duration(duration: f64) -> Result<()> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(())
    } else {
        Err(AnimEditError::InvalidConfiguration(format!(
            "duration must be a finite, non-negative number of seconds (got {duration})"
        )))
    }
}

/// Reject a scale factor that must be strictly positive.
pub fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnimEditError::InvalidConfiguration(format!(
            "{name} must be positive (got {value})"
        )))
    }
}
