//! Type definitions for rclog

pub mod device_info;
pub mod error;
pub mod record;
pub mod settings;

pub use device_info::DeviceInfo;
pub use error::{Error, Result};
pub use record::DataRecord;
pub use settings::{AlarmSetting, StopButton, TemperatureUnit, ToneSet, WorkStatus};
