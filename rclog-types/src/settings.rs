//! Byte-coded device settings
//!
//! Each setting is a closed mapping between a named option and a single
//! protocol byte. Decode policy differs per field and mirrors the device's
//! own tolerance: the status fields (work status, stop button) treat an
//! unknown byte as a protocol violation, while the optional fields (tone,
//! alarm, temperature unit) silently fall back to a default so that virgin
//! or garbage-filled devices still produce a usable snapshot.

use std::fmt;

use crate::error::{Error, Result};

/// Temperature display unit.
///
/// Unknown bytes decode as [`TemperatureUnit::Celsius`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TemperatureUnit {
    Celsius = 0x31,
    Fahrenheit = 0x13,
}

impl TemperatureUnit {
    /// Lenient decode: any byte outside the closed set yields the default.
    pub fn from_byte_or_default(value: u8) -> Self {
        match value {
            0x13 => Self::Fahrenheit,
            0x31 => Self::Celsius,
            _ => Self::Celsius,
        }
    }
}

impl From<TemperatureUnit> for u8 {
    fn from(v: TemperatureUnit) -> u8 {
        v as u8
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "C"),
            Self::Fahrenheit => write!(f, "F"),
        }
    }
}

/// Key-press tone setting.
///
/// Unknown bytes decode as [`ToneSet::None`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ToneSet {
    Permit = 0x13,
    None = 0x31,
}

impl ToneSet {
    /// Lenient decode: any byte outside the closed set yields the default.
    pub fn from_byte_or_default(value: u8) -> Self {
        match value {
            0x13 => Self::Permit,
            0x31 => Self::None,
            _ => Self::None,
        }
    }
}

impl From<ToneSet> for u8 {
    fn from(v: ToneSet) -> u8 {
        v as u8
    }
}

/// Whether the device's stop button may end a recording session.
///
/// Status field: an unknown byte is a hard decode failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StopButton {
    Enable = 0x13,
    Disable = 0x31,
}

impl From<StopButton> for u8 {
    fn from(v: StopButton) -> u8 {
        v as u8
    }
}

impl TryFrom<u8> for StopButton {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x13 => Ok(Self::Enable),
            0x31 => Ok(Self::Disable),
            _ => Err(Error::InvalidEnumValue {
                field: "stop button",
                value,
            }),
        }
    }
}

/// Over/under-limit alarm setting.
///
/// `T3`/`T10` select the consecutive-sample count that trips the alarm.
/// Unknown bytes decode as [`AlarmSetting::None`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlarmSetting {
    None = 0x00,
    T3 = 0x03,
    T10 = 0x0A,
}

impl AlarmSetting {
    /// Lenient decode: any byte outside the closed set yields the default.
    pub fn from_byte_or_default(value: u8) -> Self {
        match value {
            0x03 => Self::T3,
            0x0A => Self::T10,
            0x00 => Self::None,
            _ => Self::None,
        }
    }
}

impl From<AlarmSetting> for u8 {
    fn from(v: AlarmSetting) -> u8 {
        v as u8
    }
}

/// Recording state reported by the device.
///
/// Status field: an unknown byte is a hard decode failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WorkStatus {
    NotStart = 0x00,
    Start = 0x01,
    Stop = 0x02,
    DelayStart = 0x03,
}

impl From<WorkStatus> for u8 {
    fn from(v: WorkStatus) -> u8 {
        v as u8
    }
}

impl TryFrom<u8> for WorkStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::NotStart),
            0x01 => Ok(Self::Start),
            0x02 => Ok(Self::Stop),
            0x03 => Ok(Self::DelayStart),
            _ => Err(Error::InvalidEnumValue {
                field: "work status",
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strict_settings_reject_unknown_bytes() {
        assert!(matches!(
            StopButton::try_from(0x00),
            Err(Error::InvalidEnumValue {
                field: "stop button",
                value: 0x00
            })
        ));
        assert!(matches!(
            WorkStatus::try_from(0x13),
            Err(Error::InvalidEnumValue {
                field: "work status",
                value: 0x13
            })
        ));
    }

    #[test]
    fn test_strict_settings_accept_known_bytes() {
        assert_eq!(StopButton::try_from(0x13).unwrap(), StopButton::Enable);
        assert_eq!(StopButton::try_from(0x31).unwrap(), StopButton::Disable);
        assert_eq!(WorkStatus::try_from(0x02).unwrap(), WorkStatus::Stop);
    }

    #[test]
    fn test_lenient_settings_fall_back_to_default() {
        assert_eq!(ToneSet::from_byte_or_default(0xFF), ToneSet::None);
        assert_eq!(AlarmSetting::from_byte_or_default(0x42), AlarmSetting::None);
        assert_eq!(
            TemperatureUnit::from_byte_or_default(0x00),
            TemperatureUnit::Celsius
        );
    }

    #[test]
    fn test_lenient_settings_decode_known_bytes() {
        assert_eq!(ToneSet::from_byte_or_default(0x13), ToneSet::Permit);
        assert_eq!(AlarmSetting::from_byte_or_default(0x0A), AlarmSetting::T10);
        assert_eq!(
            TemperatureUnit::from_byte_or_default(0x13),
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn test_byte_round_trip() {
        assert_eq!(u8::from(TemperatureUnit::Celsius), 0x31);
        assert_eq!(u8::from(ToneSet::Permit), 0x13);
        assert_eq!(u8::from(StopButton::Disable), 0x31);
        assert_eq!(u8::from(AlarmSetting::T3), 0x03);
        assert_eq!(u8::from(WorkStatus::DelayStart), 0x03);
    }
}
