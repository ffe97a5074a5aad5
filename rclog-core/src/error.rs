//! Error types for rclog-core

/// Result type alias for core protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Response buffer is shorter than the message layout requires
    #[error("response too short: expected {expected} bytes, got {actual} bytes")]
    ResponseTooShort { expected: usize, actual: usize },

    /// Delay is not one of the half-hour steps the device accepts
    #[error("invalid delay {0} hours: must be a half-hour step in 0.0..=6.0")]
    InvalidDelay(f64),

    /// A required setting byte was outside its closed value set
    #[error(transparent)]
    Types(#[from] rclog_types::Error),
}
