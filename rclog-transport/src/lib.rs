//! Transport layer for the RC logger protocol
//!
//! Provides the serial link the protocol session drives. The seam is a
//! plain blocking trait: the protocol is strictly request/response over an
//! exclusively-held port, so there is nothing to suspend on.

pub mod error;
pub mod serial;

pub use error::{Error, Result};
pub use serial::SerialTransport;

use bytes::Bytes;

/// Blocking transport to a logger device.
pub trait Transport {
    /// Acquire the underlying port.
    fn open(&mut self) -> Result<()>;

    /// Release the underlying port. Always succeeds; closing a closed
    /// transport is a no-op.
    fn close(&mut self);

    /// Whether the port is currently held.
    fn is_open(&self) -> bool;

    /// Write a complete request frame.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `len` bytes, blocking until they arrive or the port's
    /// read timeout fires; may return fewer bytes than requested.
    fn read(&mut self, len: usize) -> Result<Bytes>;

    /// Human-readable port identification for diagnostics.
    fn port_name(&self) -> String;
}
