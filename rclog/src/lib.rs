//! # rclog
//!
//! Driver for the RC-4/RC-5 family of temperature data loggers, which
//! speak a small fixed binary protocol over a serial link.
//!
//! ## Features
//!
//! - Typed message catalog with checksummed frames
//! - Paginated history retrieval with timestamp reconstruction
//! - Single most-recent-record readout without a full history read
//! - Parameter, clock, serial-number and user-info updates
//!
//! ## Quick Start
//!
//! ```no_run
//! use rclog::Device;
//!
//! fn main() -> rclog::Result<()> {
//!     let mut device = Device::new("/dev/ttyUSB0");
//!
//!     // Wake the device and read its info
//!     device.init()?;
//!     let info = device.get_devinfo()?;
//!     println!("{}", info);
//!
//!     // Read the most recent measurement
//!     let latest = device.get_latest(None, None)?;
//!     println!("{}", latest);
//!
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod error;

// Re-exports
pub use device::Device;
pub use error::{Error, Result};

// Re-export types
pub use rclog_core::{Ack, DataHeaderResponse, ParamPutRequest};
pub use rclog_transport::{SerialTransport, Transport};
pub use rclog_types::{
    AlarmSetting, DataRecord, DeviceInfo, StopButton, TemperatureUnit, ToneSet, WorkStatus,
};
