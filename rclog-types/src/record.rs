//! Stored measurement records

use std::fmt;

use chrono::NaiveDateTime;

/// One stored measurement, reconstructed from a data-body page.
///
/// The device stores only raw values; the sequence number and absolute
/// timestamp are reconstructed from the recording start time and interval
/// during retrieval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRecord {
    /// 1-based position in the recording session
    pub seq: u32,

    /// Absolute time the sample was taken
    pub timestamp: NaiveDateTime,

    /// Measured value in display units (device units / 10)
    pub value: f64,
}

impl fmt::Display for DataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{:.1}",
            self.seq,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.value
        )
    }
}
