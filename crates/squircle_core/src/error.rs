//! Error types for squircle_core

use thiserror::Error;

/// Errors that can occur when describing a squircle or configuring its cache
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SquircleError {
    /// Corner smoothing outside the inclusive range [0.0, 1.0]
    #[error("corner smoothing must be between 0.0 and 1.0, got {0}")]
    InvalidSmoothing(f64),

    /// An outline cache needs room for at least one entry
    #[error("outline cache capacity must be greater than zero")]
    InvalidCacheCapacity,
}

/// Result type for squircle_core operations
pub type Result<T> = std::result::Result<T, SquircleError>;
