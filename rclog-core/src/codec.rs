//! Value codecs
//!
//! Fixed-layout encodings for the domain primitives that appear inside
//! frames: 7-byte timestamps, 3-byte intervals and the nibble-coded start
//! delay. Timestamp and interval decoding absorbs malformed bytes into
//! `None` because devices fill unused slots with sentinel bytes (all-0xFF
//! on a virgin device) that do not form a valid calendar value.

use byteorder::{BigEndian, ByteOrder};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Error, Result};

/// Timestamp wire width
pub const TIMESTAMP_LEN: usize = 7;

/// Interval wire width
pub const INTERVAL_LEN: usize = 3;

/// Delay bytes the device reports: high nibble = whole hours, low nibble
/// set = extra half hour.
const DELAY_TABLE: [u8; 6] = [0x00, 0x01, 0x10, 0x11, 0x20, 0x21];

/// Encode a timestamp as big-endian 16-bit year followed by month, day,
/// hour, minute and second bytes.
pub fn pack_timestamp(dt: NaiveDateTime) -> [u8; TIMESTAMP_LEN] {
    let year = dt.year();
    [
        ((year & 0xFF00) >> 8) as u8,
        (year & 0x00FF) as u8,
        dt.month() as u8,
        dt.day() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
    ]
}

/// Decode a 7-byte timestamp; bytes that do not form a possible calendar
/// date yield `None`.
pub fn unpack_timestamp(bytes: &[u8]) -> Option<NaiveDateTime> {
    if bytes.len() != TIMESTAMP_LEN {
        return None;
    }

    let year = BigEndian::read_i16(&bytes[0..2]) as i32;
    if !(1..=9999).contains(&year) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, bytes[2] as u32, bytes[3] as u32)?;
    date.and_hms_opt(bytes[4] as u32, bytes[5] as u32, bytes[6] as u32)
}

/// Encode a recording interval as hour, minute and second bytes.
pub fn pack_interval(t: NaiveTime) -> [u8; INTERVAL_LEN] {
    [t.hour() as u8, t.minute() as u8, t.second() as u8]
}

/// Decode a 3-byte interval; malformed bytes yield `None`.
pub fn unpack_interval(bytes: &[u8]) -> Option<NaiveTime> {
    if bytes.len() != INTERVAL_LEN {
        return None;
    }

    NaiveTime::from_hms_opt(bytes[0] as u32, bytes[1] as u32, bytes[2] as u32)
}

/// Decode a start-delay byte to hours.
///
/// Only the six table values are meaningful; any other byte decodes to
/// 0.0 with no error.
pub fn unpack_delay(raw: u8) -> f64 {
    if DELAY_TABLE.contains(&raw) {
        (raw / 16) as f64 + 0.5 * (raw % 16) as f64
    } else {
        0.0
    }
}

/// Encode a start delay in hours.
///
/// The device accepts half-hour steps in 0.0..=6.0; anything else is
/// rejected. Half steps encode with a low nibble of 5, which the device
/// accepts even though it reports a low nibble of 1 in its own info
/// response.
pub fn pack_delay(delay: f64) -> Result<u8> {
    let steps = delay * 2.0;
    if !(0.0..=12.0).contains(&steps) || steps.fract() != 0.0 {
        return Err(Error::InvalidDelay(delay));
    }

    let half = if delay.fract() != 0.0 { 5 } else { 0 };
    Ok((delay as u8) * 16 + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_unpack_timestamp() {
        assert_eq!(
            unpack_timestamp(&[0x07, 0xDF, 0x05, 0x0E, 0x07, 0x38, 0x0E]),
            Some(dt(2015, 5, 14, 7, 56, 14))
        );
    }

    #[test]
    fn test_pack_timestamp() {
        assert_eq!(
            pack_timestamp(dt(2015, 1, 2, 3, 4, 5)),
            [0x07, 0xDF, 0x01, 0x02, 0x03, 0x04, 0x05]
        );
    }

    #[test]
    fn test_timestamp_round_trip() {
        let ts = dt(2026, 8, 7, 23, 59, 58);
        assert_eq!(unpack_timestamp(&pack_timestamp(ts)), Some(ts));
    }

    #[test]
    fn test_unpack_timestamp_sentinel_is_absent() {
        assert_eq!(unpack_timestamp(&[0xFF; 7]), None);
        assert_eq!(unpack_timestamp(&[0x00; 7]), None);
    }

    #[test]
    fn test_unpack_timestamp_impossible_date_is_absent() {
        // month 13
        assert_eq!(
            unpack_timestamp(&[0x07, 0xDF, 0x0D, 0x01, 0x00, 0x00, 0x00]),
            None
        );
        // February 30th
        assert_eq!(
            unpack_timestamp(&[0x07, 0xDF, 0x02, 0x1E, 0x00, 0x00, 0x00]),
            None
        );
    }

    #[test]
    fn test_interval_round_trip() {
        let t = NaiveTime::from_hms_opt(1, 2, 3).unwrap();
        assert_eq!(pack_interval(t), [0x01, 0x02, 0x03]);
        assert_eq!(unpack_interval(&[0x01, 0x02, 0x03]), Some(t));
    }

    #[test]
    fn test_unpack_interval_malformed_is_absent() {
        assert_eq!(unpack_interval(&[0xFF, 0xFF, 0xFF]), None);
        assert_eq!(unpack_interval(&[24, 0, 0]), None);
    }

    #[test]
    fn test_unpack_delay_table() {
        assert_eq!(unpack_delay(0x00), 0.0);
        assert_eq!(unpack_delay(0x01), 0.5);
        assert_eq!(unpack_delay(0x10), 1.0);
        assert_eq!(unpack_delay(0x11), 1.5);
        assert_eq!(unpack_delay(0x20), 2.0);
        assert_eq!(unpack_delay(0x21), 2.5);
    }

    #[test]
    fn test_pack_delay_steps() {
        assert_eq!(pack_delay(0.0).unwrap(), 0x00);
        assert_eq!(pack_delay(0.5).unwrap(), 0x05);
        assert_eq!(pack_delay(1.5).unwrap(), 0x15);
        assert_eq!(pack_delay(2.0).unwrap(), 0x20);
        assert_eq!(pack_delay(6.0).unwrap(), 0x60);
    }

    #[test]
    fn test_pack_delay_rejects_off_grid_values() {
        assert!(matches!(pack_delay(0.25), Err(Error::InvalidDelay(_))));
        assert!(matches!(pack_delay(6.5), Err(Error::InvalidDelay(_))));
        assert!(matches!(pack_delay(-0.5), Err(Error::InvalidDelay(_))));
    }

    #[test]
    fn test_whole_hour_delays_round_trip() {
        for delay in [0.0, 1.0, 2.0] {
            assert_eq!(unpack_delay(pack_delay(delay).unwrap()), delay);
        }
    }

    proptest! {
        #[test]
        fn prop_unknown_delay_bytes_decode_to_zero(raw in any::<u8>()) {
            prop_assume!(![0x00, 0x01, 0x10, 0x11, 0x20, 0x21].contains(&raw));
            prop_assert_eq!(unpack_delay(raw), 0.0);
        }
    }
}
