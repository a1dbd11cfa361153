//! Error handling for line-of-therapy flow construction.

use std::io;

/// Errors produced while loading payloads or building flow graphs
#[derive(Debug, thiserror::Error)]
pub enum LotError {
    /// No treatment lines were supplied for the selected diagnosis
    #[error("insufficient data: at least one treatment line is required")]
    InsufficientData,

    /// Error decoding a payload or configuration document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading a payload or configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration values that would break the output invariants
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LotError {
    /// Whether this error is the distinguished "nothing to draw" outcome
    #[must_use]
    pub const fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }
}

/// Result type for flow graph operations
pub type Result<T> = std::result::Result<T, LotError>;
