pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required setting byte is outside its closed value set.
    ///
    /// Only the strict settings (work status, stop button) raise this;
    /// the tolerant settings fall back to their defaults instead.
    #[error("invalid {field} byte: 0x{value:02X}")]
    InvalidEnumValue { field: &'static str, value: u8 },
}
