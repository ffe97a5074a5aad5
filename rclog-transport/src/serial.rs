//! Serial transport

use std::io::{Read, Write};
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use serialport::SerialPort;
use tracing::{debug, trace, warn};

use rclog_core::constants::{DEFAULT_BAUD_RATE, DEFAULT_TIMEOUT_SECS};

use crate::{error::*, Transport};

/// Serial link to a logger's USB/RS-232 cradle.
///
/// The port stays configured for the lifetime of the value but is only
/// physically held between `open` and `close`; the device needs the port
/// released between command sessions.
pub struct SerialTransport {
    path: String,
    baud_rate: u32,
    timeout: Duration,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Create a transport for the given port path (e.g. `/dev/ttyUSB0`).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: None,
        }
    }

    /// Set the baud rate (the hardware default is 115000).
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set the read timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Transport for SerialTransport {
    fn open(&mut self) -> Result<()> {
        if self.is_open() {
            return Err(Error::AlreadyOpen);
        }

        debug!("Opening {} at {} baud...", self.path, self.baud_rate);

        let port = serialport::new(self.path.as_str(), self.baud_rate)
            .timeout(self.timeout)
            .open()?;

        self.port = Some(port);
        Ok(())
    }

    fn close(&mut self) {
        if self.port.take().is_some() {
            debug!("Closed {}", self.path);
        }
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotOpen)?;

        trace!("Writing {} bytes: {:02X?}", data.len(), &data[..data.len().min(16)]);

        port.write_all(data)?;
        port.flush()?;

        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Bytes> {
        let port = self.port.as_mut().ok_or(Error::NotOpen)?;

        let mut buf = BytesMut::zeroed(len);
        let mut filled = 0;

        // Accumulate until the requested length; a port timeout ends the
        // read early and the partial buffer is returned to the caller.
        while filled < len {
            match port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                    warn!("Read timed out after {} of {} bytes", filled, len);
                    break;
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }

        buf.truncate(filled);
        trace!("Read {} of {} bytes", filled, len);

        Ok(buf.freeze())
    }

    fn port_name(&self) -> String {
        self.path.clone()
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if self.is_open() {
            warn!("Serial transport dropped while still open");
        }
    }
}
