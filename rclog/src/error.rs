//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] rclog_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] rclog_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] rclog_types::Error),

    /// Model number with no known page size; the retrieval engine refuses
    /// to guess for unknown hardware.
    #[error("Unsupported model number {0}: cannot determine page size")]
    UnsupportedModel(u8),

    /// The device reports zero stored records, so there is no latest one.
    #[error("Device has no stored records")]
    NoRecords,

    #[error("Invalid response from device: {0}")]
    InvalidResponse(String),
}
