//! Error types
//!
//! Every failure is a precondition violation detected at construction or on a
//! tick. None of them are recoverable within a session.

use thiserror::Error;

/// Rejections raised while validating [`crate::Settings`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Animation cadence must be a positive, finite number of seconds.
    #[error("{entity} frame period must be positive and finite, got {period}")]
    InvalidFramePeriod {
        entity: &'static str,
        period: f32,
    },

    /// A texture (or its sprite grid) has a zero dimension.
    #[error("texture '{name}' has zero size: {width}x{height} split into {columns}x{rows}")]
    EmptyTexture {
        name: &'static str,
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
    },

    #[error("obstacle count must be at least 1")]
    NoObstacles,

    #[error("target frame rate must be positive")]
    InvalidFrameRate,

    #[error("layer scale must be positive and finite, got {0}")]
    InvalidLayerScale(f32),

    /// Physics constant pointing the wrong way.
    #[error("{name} must be {expected}, got {value}")]
    WrongSign {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },

    /// Physics or layout constant that is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
}

/// Errors surfaced by the simulation core.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),

    /// Elapsed time handed to a tick was negative, NaN or infinite.
    #[error("elapsed time must be finite and non-negative, got {0}")]
    InvalidElapsed(f32),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
