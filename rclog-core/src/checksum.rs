//! Frame checksum
//!
//! Every outgoing frame ends with the sum of all preceding bytes modulo
//! 256. Responses carry the same trailing byte, but the protocol is driven
//! positionally and the trailing byte goes unverified on read, so only
//! `calculate` and `append` exist here.

use bytes::{BufMut, BytesMut};
use tracing::trace;

/// Calculate the checksum of a frame body.
pub fn calculate(bytes: &[u8]) -> u8 {
    let sum: u32 = bytes.iter().map(|&b| b as u32).sum();
    let checksum = (sum % 0x100) as u8;

    trace!(
        len = bytes.len(),
        checksum = format!("0x{:02X}", checksum),
        "calculated checksum"
    );

    checksum
}

/// Append the checksum of everything written so far.
pub fn append(buf: &mut BytesMut) {
    let checksum = calculate(buf);
    buf.put_u8(checksum);
}
