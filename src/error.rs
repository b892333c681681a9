//! Configuration errors
//!
//! Raised when the host hands the simulation parameters it cannot run with.
//! These are contract violations upstream, so nothing here is clamped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be at least 1 frame")]
    ZeroInterval { name: &'static str },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("{name} must exceed twice the hitbox inset ({min}), got {value}")]
    FaceTooSmall {
        name: &'static str,
        value: f32,
        min: f32,
    },

    #[error("impulse must point upward (negative), got {0}")]
    ImpulseNotUpward(f32),

    #[error("win score must be at least 1")]
    ZeroWinScore,

    #[error("invalid field dimensions {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("parameter overrides must be a JSON object")]
    NotAnObject,

    #[error("unknown parameter '{0}'")]
    UnknownKey(String),

    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}
