//! Device information snapshot

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};

use crate::settings::{AlarmSetting, StopButton, TemperatureUnit, ToneSet, WorkStatus};

/// Everything a device reports about itself in one info query.
///
/// Constructed fresh on every query and never mutated afterwards. The
/// timestamps and the recording interval are optional because a virgin or
/// reset device fills those fields with sentinel bytes that decode to no
/// valid calendar value.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    /// Station number the device answers on
    pub station_no: u8,

    /// Hardware model number (40 = RC-4, 50 = RC-5)
    pub model_no: u8,

    /// Time between consecutive stored records
    pub rec_interval: Option<NaiveTime>,

    /// Upper alarm limit in degrees, one decimal
    pub upper_limit: f64,

    /// Lower alarm limit in degrees, one decimal
    pub lower_limit: f64,

    /// Last time the device talked to a host
    pub last_online: Option<NaiveDateTime>,

    /// Current recording state
    pub work_status: WorkStatus,

    /// Start of the current recording session
    pub start_time: Option<NaiveDateTime>,

    /// Stop-button setting
    pub stop_button: StopButton,

    /// Number of stored records
    pub rec_count: u16,

    /// Device's current clock
    pub current: Option<NaiveDateTime>,

    /// Free-text user info (up to 100 bytes UTF-8 on the wire)
    pub user_info: String,

    /// Device serial number (up to 10 bytes UTF-8 on the wire)
    pub dev_num: String,

    /// Start delay in hours (half-hour steps)
    pub delay: f64,

    /// Key-press tone setting
    pub tone_set: ToneSet,

    /// Alarm setting
    pub alarm: AlarmSetting,

    /// Temperature display unit
    pub temp_unit: TemperatureUnit,

    /// Additive temperature correction in degrees, one decimal
    pub temp_calibration: f64,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device[station={}, model={}, records={}, status={:?}]",
            self.station_no, self.model_no, self.rec_count, self.work_status
        )
    }
}
