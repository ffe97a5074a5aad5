//! Message catalog
//!
//! One request/response pair per protocol message. Every request encodes to
//! a complete frame (checksum appended) and knows exactly how many response
//! bytes the device will send back; the protocol does not self-delimit, so
//! the session layer reads precisely that many. Responses are parsed
//! positionally: the leading marker byte is discarded without being checked
//! and the trailing checksum byte is never verified, a long-standing quirk
//! of the device family's host protocol.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use byteorder::{BigEndian, ByteOrder};
use chrono::{NaiveDateTime, NaiveTime};
use tracing::trace;

use rclog_types::{
    AlarmSetting, DeviceInfo, StopButton, TemperatureUnit, ToneSet, WorkStatus,
};

use crate::checksum;
use crate::codec;
use crate::constants::{
    ACK_LEN, CMD_CLOCK_SET, CMD_DATA_BODY, CMD_DATA_HEADER, CMD_DEV_NUM, CMD_PARAM_PUT,
    CMD_USER_INFO, DATA_HEADER_LEN, DEVINFO_LEN, DEVINFO_REQUEST, DEV_NUM_LEN, INIT_REQUEST,
    REQUEST_MARKER, USER_INFO_LEN,
};
use crate::error::{Error, Result};

mod sealed {
    /// The catalog is closed: the protocol has a fixed, enumerable set of
    /// messages, and ad-hoc frames go through [`super::RawRequest`].
    pub trait Sealed {}

    impl Sealed for super::InitRequest {}
    impl Sealed for super::DevInfoRequest {}
    impl Sealed for super::ParamPutRequest {}
    impl Sealed for super::DataHeaderRequest {}
    impl Sealed for super::DataBodyRequest {}
    impl Sealed for super::ClockSetRequest {}
    impl Sealed for super::DevNumRequest {}
    impl Sealed for super::UserInfoRequest {}
    impl Sealed for super::RawRequest {}
    impl Sealed for super::Ack {}
    impl Sealed for rclog_types::DeviceInfo {}
    impl Sealed for super::DataHeaderResponse {}
    impl Sealed for super::DataBodyResponse {}
}

/// A request frame with a statically known response.
pub trait Request: sealed::Sealed {
    type Response: Response;

    /// Encode the complete outgoing frame, checksum included.
    fn encode(&self) -> Result<Bytes>;

    /// Exact number of bytes the device sends in reply.
    fn response_len(&self) -> usize;
}

/// A response parsed positionally from an exact-length buffer.
pub trait Response: sealed::Sealed + Sized {
    fn decode(buf: &[u8]) -> Result<Self>;
}

fn ensure_len(buf: &[u8], expected: usize) -> Result<()> {
    if buf.len() < expected {
        return Err(Error::ResponseTooShort {
            expected,
            actual: buf.len(),
        });
    }
    Ok(())
}

/// Append the checksum and freeze the frame.
fn seal(mut buf: BytesMut) -> Bytes {
    checksum::append(&mut buf);
    let frame = buf.freeze();
    trace!(frame = %hex::encode(&frame), "sealed request frame");
    frame
}

/// Fixed-width UTF-8 field: NUL-stripped on decode, empty on invalid UTF-8.
fn decode_padded_str(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.trim_end_matches('\0').to_string(),
        Err(_) => String::new(),
    }
}

/// Fixed-width UTF-8 field: byte-truncated and NUL-padded on encode.
fn encode_padded_str(s: &str, width: usize) -> Vec<u8> {
    let mut field = vec![0u8; width];
    let src = s.as_bytes();
    let n = src.len().min(width);
    field[..n].copy_from_slice(&src[..n]);
    field
}

/// Opaque acknowledgement carried by the write-style responses.
///
/// The device answers parameter writes, clock sets and similar commands
/// with a short frame that has no structured payload; the raw bytes are
/// captured as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub msg: Bytes,
}

impl Response for Ack {
    fn decode(buf: &[u8]) -> Result<Self> {
        Ok(Self {
            msg: Bytes::copy_from_slice(buf),
        })
    }
}

/// Wake-up handshake. Fixed literal frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitRequest;

impl Request for InitRequest {
    type Response = Ack;

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::from_static(&INIT_REQUEST))
    }

    fn response_len(&self) -> usize {
        ACK_LEN
    }
}

/// Device information query. Fixed literal frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevInfoRequest;

impl Request for DevInfoRequest {
    type Response = DeviceInfo;

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::from_static(&DEVINFO_REQUEST))
    }

    fn response_len(&self) -> usize {
        DEVINFO_LEN
    }
}

impl Response for DeviceInfo {
    fn decode(buf: &[u8]) -> Result<Self> {
        ensure_len(buf, DEVINFO_LEN)?;
        let mut buf = buf;

        buf.advance(1); // leading marker, discarded
        let station_no = buf.get_u8();
        buf.advance(1);
        let model_no = buf.get_u8();
        buf.advance(1);
        let rec_interval = codec::unpack_interval(&buf[..3]);
        buf.advance(3);
        let upper_limit = buf.get_i16() as f64 / 10.0;
        let lower_limit = buf.get_i16() as f64 / 10.0;
        let last_online = codec::unpack_timestamp(&buf[..7]);
        buf.advance(7);
        let work_status = WorkStatus::try_from(buf.get_u8())?;
        let start_time = codec::unpack_timestamp(&buf[..7]);
        buf.advance(7);
        let stop_button = StopButton::try_from(buf.get_u8())?;
        buf.advance(1);
        let rec_count = buf.get_u16();
        let current = codec::unpack_timestamp(&buf[..7]);
        buf.advance(7);
        let user_info = decode_padded_str(&buf[..USER_INFO_LEN]);
        buf.advance(USER_INFO_LEN);
        let dev_num = decode_padded_str(&buf[..DEV_NUM_LEN]);
        buf.advance(DEV_NUM_LEN);
        let delay = codec::unpack_delay(buf.get_u8());
        let tone_set = ToneSet::from_byte_or_default(buf.get_u8());
        let alarm = AlarmSetting::from_byte_or_default(buf.get_u8());
        let temp_unit = TemperatureUnit::from_byte_or_default(buf.get_u8());
        let temp_calibration = buf.get_i8() as f64 / 10.0;
        // 7 trailing padding bytes ignored

        Ok(DeviceInfo {
            station_no,
            model_no,
            rec_interval,
            upper_limit,
            lower_limit,
            last_online,
            work_status,
            start_time,
            stop_button,
            rec_count,
            current,
            user_info,
            dev_num,
            delay,
            tone_set,
            alarm,
            temp_unit,
            temp_calibration,
        })
    }
}

/// Parameter update. Built from defaults or derived from a [`DeviceInfo`]
/// snapshot; the caller owns it and may adjust fields before sending.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamPutRequest {
    pub target_station_no: u8,
    pub rec_interval: NaiveTime,
    pub upper_limit: f64,
    pub lower_limit: f64,
    pub update_station_no: u8,
    pub stop_button: StopButton,
    pub delay: f64,
    pub tone_set: ToneSet,
    pub alarm: AlarmSetting,
    pub temp_unit: TemperatureUnit,
    pub temp_calibration: f64,
}

impl ParamPutRequest {
    /// Factory defaults: 10-minute interval, +60/-30 limits, station 1.
    pub fn new(target_station_no: u8) -> Self {
        Self {
            target_station_no,
            rec_interval: NaiveTime::from_hms_opt(0, 10, 0).unwrap(),
            upper_limit: 60.0,
            lower_limit: -30.0,
            update_station_no: 1,
            stop_button: StopButton::Disable,
            delay: 0.0,
            tone_set: ToneSet::None,
            alarm: AlarmSetting::None,
            temp_unit: TemperatureUnit::Celsius,
            temp_calibration: 0.0,
        }
    }

    /// Start from a device's current settings.
    ///
    /// A device that never recorded reports no interval; 30 seconds is
    /// substituted so the resulting request is always sendable.
    pub fn from_device_info(info: &DeviceInfo) -> Self {
        Self {
            target_station_no: info.station_no,
            rec_interval: info
                .rec_interval
                .unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 30).unwrap()),
            upper_limit: info.upper_limit,
            lower_limit: info.lower_limit,
            update_station_no: info.station_no,
            stop_button: info.stop_button,
            delay: info.delay,
            tone_set: info.tone_set,
            alarm: info.alarm,
            temp_unit: info.temp_unit,
            temp_calibration: info.temp_calibration,
        }
    }
}

impl Request for ParamPutRequest {
    type Response = Ack;

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(25);
        buf.put_u8(REQUEST_MARKER);
        buf.put_u8(self.target_station_no);
        buf.put_u8(CMD_PARAM_PUT);
        buf.put_u8(0x00);
        buf.put_slice(&codec::pack_interval(self.rec_interval));
        buf.put_i16((self.upper_limit * 10.0) as i16);
        buf.put_i16((self.lower_limit * 10.0) as i16);
        buf.put_u8(self.update_station_no);
        buf.put_u8(self.stop_button.into());
        buf.put_u8(codec::pack_delay(self.delay)?);
        buf.put_u8(self.tone_set.into());
        buf.put_u8(self.alarm.into());
        buf.put_u8(self.temp_unit.into());
        buf.put_i8((self.temp_calibration * 10.0) as i8);
        buf.put_slice(&[0u8; 6]);
        Ok(seal(buf))
    }

    fn response_len(&self) -> usize {
        ACK_LEN
    }
}

/// Query for the stored-record count and session start time of a station.
#[derive(Debug, Clone, Copy)]
pub struct DataHeaderRequest {
    pub target_station_no: u8,
}

impl Request for DataHeaderRequest {
    type Response = DataHeaderResponse;

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(5);
        buf.put_u8(REQUEST_MARKER);
        buf.put_u8(self.target_station_no);
        buf.put_u8(CMD_DATA_HEADER);
        buf.put_u8(0x00);
        Ok(seal(buf))
    }

    fn response_len(&self) -> usize {
        DATA_HEADER_LEN
    }
}

/// Pagination authority: how many records are stored and when the
/// recording session began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataHeaderResponse {
    pub rec_count: u16,
    pub start_time: Option<NaiveDateTime>,
}

impl Response for DataHeaderResponse {
    fn decode(buf: &[u8]) -> Result<Self> {
        ensure_len(buf, DATA_HEADER_LEN)?;
        let mut buf = buf;

        buf.advance(1); // leading marker, discarded
        let rec_count = buf.get_u16();
        let start_time = codec::unpack_timestamp(&buf[..7]);
        // trailing checksum byte ignored

        Ok(Self {
            rec_count,
            start_time,
        })
    }
}

/// One page of stored records.
///
/// `rec_count` is the number of records this page is expected to carry;
/// the device's reply is sized from it because data-body responses are the
/// one message whose length is not a constant of the message kind.
#[derive(Debug, Clone, Copy)]
pub struct DataBodyRequest {
    pub target_station_no: u8,
    pub page_no: u8,
    pub rec_count: u16,
}

impl Request for DataBodyRequest {
    type Response = DataBodyResponse;

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(5);
        buf.put_u8(REQUEST_MARKER);
        buf.put_u8(self.target_station_no);
        buf.put_u8(CMD_DATA_BODY);
        buf.put_u8(self.page_no);
        Ok(seal(buf))
    }

    fn response_len(&self) -> usize {
        self.rec_count as usize * 2 + 2
    }
}

/// Raw page values in device units (tenths of a degree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBodyResponse {
    pub values: Vec<i16>,
}

impl Response for DataBodyResponse {
    fn decode(buf: &[u8]) -> Result<Self> {
        ensure_len(buf, 2)?;

        // marker byte in front, checksum byte behind, both ignored
        let values = buf[1..buf.len() - 1]
            .chunks_exact(2)
            .map(BigEndian::read_i16)
            .collect();

        Ok(Self { values })
    }
}

/// Set the device clock.
#[derive(Debug, Clone, Copy)]
pub struct ClockSetRequest {
    pub target_station_no: u8,
    pub set_time: NaiveDateTime,
}

impl Request for ClockSetRequest {
    type Response = Ack;

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(12);
        buf.put_u8(REQUEST_MARKER);
        buf.put_u8(self.target_station_no);
        buf.put_u8(CMD_CLOCK_SET);
        buf.put_u8(0x00);
        buf.put_slice(&codec::pack_timestamp(self.set_time));
        Ok(seal(buf))
    }

    fn response_len(&self) -> usize {
        ACK_LEN
    }
}

/// Write the device serial number (10 bytes on the wire).
#[derive(Debug, Clone)]
pub struct DevNumRequest {
    pub target_station_no: u8,
    pub device_number: String,
}

impl Request for DevNumRequest {
    type Response = Ack;

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(15);
        buf.put_u8(REQUEST_MARKER);
        buf.put_u8(self.target_station_no);
        buf.put_u8(CMD_DEV_NUM);
        buf.put_u8(0x00);
        buf.put_slice(&encode_padded_str(&self.device_number, DEV_NUM_LEN));
        Ok(seal(buf))
    }

    fn response_len(&self) -> usize {
        ACK_LEN
    }
}

/// Write the free-text user info field (100 bytes on the wire).
#[derive(Debug, Clone)]
pub struct UserInfoRequest {
    pub target_station_no: u8,
    pub user_info: String,
}

impl Request for UserInfoRequest {
    type Response = Ack;

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(105);
        buf.put_u8(REQUEST_MARKER);
        buf.put_u8(self.target_station_no);
        buf.put_u8(CMD_USER_INFO);
        buf.put_u8(0x00);
        buf.put_slice(&encode_padded_str(&self.user_info, USER_INFO_LEN));
        Ok(seal(buf))
    }

    fn response_len(&self) -> usize {
        ACK_LEN
    }
}

/// Caller-supplied passthrough frame.
///
/// Encode and decode are identity functions: the payload goes out exactly
/// as given (no checksum appended) and the reply comes back as opaque
/// bytes of a caller-supplied length.
#[derive(Debug, Clone)]
pub struct RawRequest {
    pub payload: Bytes,
    pub response_len: usize,
}

impl Request for RawRequest {
    type Response = Ack;

    fn encode(&self) -> Result<Bytes> {
        Ok(self.payload.clone())
    }

    fn response_len(&self) -> usize {
        self.response_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn bin(s: &str) -> Vec<u8> {
        hex::decode(s.split_whitespace().collect::<String>()).unwrap()
    }

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    const DEVINFO_STATION_130: &str = "55 82 01 28 0A 00 00 1E 02 58 FE D4 07 DF 05 0E \
         16 2F 04 02 07 DF 05 0E 07 38 0E 13 64 00 09 07 \
         DF 05 0E 16 2F 36 52 43 2D 34 20 44 61 74 61 20 \
         4C 6F 67 67 65 72 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 39 39 30 30 31 31 \
         32 32 33 33 11 31 00 31 F1 00 00 00 00 00 00 B3";

    const DEVINFO_VIRGIN: &str = "55 02 01 28 0A FF FF FF 02 58 FE D4 07 DF 05 0E \
         16 2F 04 02 FF FF 05 0E 07 38 0E 13 64 00 09 07 \
         DF 05 0E 16 2F 36 FF FF FF FF FF FF FF FF FF FF \
         4C 6F 67 67 65 72 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \
         00 00 00 00 00 00 00 00 00 00 FF FF FF FF FF FF \
         FF FF FF FF FF FF FF FF FF FF FF FF FF FF 00 B3";

    #[test]
    fn test_init_request_is_fixed_literal() {
        assert_eq!(
            InitRequest.encode().unwrap().as_ref(),
            bin("CC 00 0A 00 D6").as_slice()
        );
    }

    #[test]
    fn test_devinfo_request_is_fixed_literal() {
        assert_eq!(
            DevInfoRequest.encode().unwrap().as_ref(),
            bin("CC 00 06 00 D2").as_slice()
        );
    }

    #[test]
    fn test_ack_captures_raw_bytes() {
        let ack = Ack::decode(&bin("55 A3 F8")).unwrap();
        assert_eq!(ack.msg.as_ref(), bin("55 A3 F8").as_slice());
    }

    #[test]
    fn test_devinfo_decode() {
        let info = DeviceInfo::decode(&bin(DEVINFO_STATION_130)).unwrap();

        assert_eq!(info.station_no, 130);
        assert_eq!(info.model_no, 40);
        assert_eq!(
            info.rec_interval,
            Some(NaiveTime::from_hms_opt(0, 0, 30).unwrap())
        );
        assert_eq!(info.upper_limit, 60.0);
        assert_eq!(info.lower_limit, -30.0);
        assert_eq!(info.last_online, Some(dt(2015, 5, 14, 22, 47, 4)));
        assert_eq!(info.work_status, WorkStatus::Stop);
        assert_eq!(info.start_time, Some(dt(2015, 5, 14, 7, 56, 14)));
        assert_eq!(info.stop_button, StopButton::Enable);
        assert_eq!(info.rec_count, 9);
        assert_eq!(info.current, Some(dt(2015, 5, 14, 22, 47, 54)));
        assert_eq!(info.user_info, "RC-4 Data Logger");
        assert_eq!(info.dev_num, "9900112233");
        assert_eq!(info.delay, 1.5);
        assert_eq!(info.tone_set, ToneSet::None);
        assert_eq!(info.alarm, AlarmSetting::None);
        assert_eq!(info.temp_unit, TemperatureUnit::Celsius);
        assert_eq!(info.temp_calibration, -1.5);
    }

    #[test]
    fn test_devinfo_decode_station_2_known_vector() {
        let mut raw = bin(DEVINFO_STATION_130);
        raw[1] = 0x02;
        let info = DeviceInfo::decode(&raw).unwrap();

        assert_eq!(info.station_no, 2);
        assert_eq!(info.model_no, 40);
        assert_eq!(info.stop_button, StopButton::Enable);
    }

    #[test]
    fn test_devinfo_decode_garbage_dev_num_is_empty() {
        let info = DeviceInfo::decode(&bin(DEVINFO_VIRGIN)).unwrap();
        assert_eq!(info.dev_num, "");
    }

    #[test]
    fn test_devinfo_decode_virgin_device() {
        let info = DeviceInfo::decode(&bin(DEVINFO_VIRGIN)).unwrap();

        assert_eq!(info.rec_interval, None);
        assert_eq!(info.start_time, None);
        assert_eq!(info.delay, 0.0);
        assert_eq!(info.tone_set, ToneSet::None);
        assert_eq!(info.alarm, AlarmSetting::None);
        assert_eq!(info.temp_unit, TemperatureUnit::Celsius);
        assert_eq!(info.temp_calibration, -0.1);
    }

    #[test]
    fn test_devinfo_decode_short_buffer() {
        let result = DeviceInfo::decode(&[0x55, 0x02, 0x01]);
        assert!(matches!(
            result,
            Err(Error::ResponseTooShort {
                expected: 160,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_devinfo_decode_bad_work_status_fails() {
        let mut raw = bin(DEVINFO_STATION_130);
        raw[19] = 0x7F; // work status outside the closed set
        assert!(matches!(
            DeviceInfo::decode(&raw),
            Err(Error::Types(rclog_types::Error::InvalidEnumValue {
                field: "work status",
                ..
            }))
        ));
    }

    #[test]
    fn test_devinfo_decode_bad_stop_button_fails() {
        let mut raw = bin(DEVINFO_STATION_130);
        raw[27] = 0x00; // stop button outside the closed set
        assert!(matches!(
            DeviceInfo::decode(&raw),
            Err(Error::Types(rclog_types::Error::InvalidEnumValue {
                field: "stop button",
                ..
            }))
        ));
    }

    #[test]
    fn test_param_put_from_device_info() {
        let info = DeviceInfo::decode(&bin(DEVINFO_STATION_130)).unwrap();
        let req = ParamPutRequest::from_device_info(&info);

        assert_eq!(req.target_station_no, 130);
        assert_eq!(req.update_station_no, 130);
        assert_eq!(
            req.rec_interval,
            NaiveTime::from_hms_opt(0, 0, 30).unwrap()
        );
        assert_eq!(req.upper_limit, 60.0);
        assert_eq!(req.lower_limit, -30.0);
        assert_eq!(req.stop_button, StopButton::Enable);
        assert_eq!(req.delay, 1.5);
        assert_eq!(req.tone_set, ToneSet::None);
        assert_eq!(req.alarm, AlarmSetting::None);
        assert_eq!(req.temp_unit, TemperatureUnit::Celsius);
        assert_eq!(req.temp_calibration, -1.5);
    }

    #[test]
    fn test_param_put_from_virgin_device_info_substitutes_interval() {
        let info = DeviceInfo::decode(&bin(DEVINFO_VIRGIN)).unwrap();
        let req = ParamPutRequest::from_device_info(&info);

        assert_eq!(req.target_station_no, 2);
        assert_eq!(req.update_station_no, 2);
        assert_eq!(
            req.rec_interval,
            NaiveTime::from_hms_opt(0, 0, 30).unwrap()
        );
        assert_eq!(req.delay, 0.0);
        assert_eq!(req.temp_calibration, -0.1);
    }

    #[test]
    fn test_param_put_encode_known_vector() {
        let mut req = ParamPutRequest::new(130);
        req.rec_interval = NaiveTime::from_hms_opt(0, 0, 30).unwrap();
        req.update_station_no = 130;
        req.stop_button = StopButton::Enable;
        req.delay = 0.0;
        req.temp_calibration = -1.5;

        assert_eq!(
            req.encode().unwrap().as_ref(),
            bin("33 82 05 00 00 00 1E 02 58 FE D4 82 13 00 31 00 \
                 31 F1 00 00 00 00 00 00 EC")
            .as_slice()
        );
    }

    #[test]
    fn test_param_put_encode_rejects_off_grid_delay() {
        let mut req = ParamPutRequest::new(1);
        req.delay = 1.25;
        assert!(matches!(req.encode(), Err(Error::InvalidDelay(_))));
    }

    #[test]
    fn test_data_header_request_encode() {
        let req = DataHeaderRequest {
            target_station_no: 130,
        };
        assert_eq!(req.encode().unwrap().as_ref(), bin("33 82 01 00 B6").as_slice());
        assert_eq!(req.response_len(), 11);
    }

    #[test]
    fn test_data_header_decode() {
        let res =
            DataHeaderResponse::decode(&bin("55 0B 76 07 DF 05 0E 17 04 35 1F")).unwrap();
        assert_eq!(res.rec_count, 2934);
        assert_eq!(res.start_time, Some(dt(2015, 5, 14, 23, 4, 53)));
    }

    #[test]
    fn test_data_body_request_encode() {
        let req = DataBodyRequest {
            target_station_no: 130,
            page_no: 131,
            rec_count: 100,
        };
        assert_eq!(req.encode().unwrap().as_ref(), bin("33 82 02 83 3A").as_slice());
        assert_eq!(req.response_len(), 202);
    }

    #[test]
    fn test_data_body_decode() {
        let res = DataBodyResponse::decode(&bin(
            "55 00 01 FF FF 00 03 00 04 00 05 00 06 00 07 00 08 00 09 00 0A 8C",
        ))
        .unwrap();
        assert_eq!(res.values.len(), 10);
        assert_eq!(res.values, vec![1, -1, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_clock_set_encode_known_vector() {
        let req = ClockSetRequest {
            target_station_no: 130,
            set_time: dt(2015, 5, 14, 23, 4, 53),
        };
        assert_eq!(
            req.encode().unwrap().as_ref(),
            bin("33 82 07 00 07 DF 05 0E 17 04 35 05").as_slice()
        );
    }

    #[test]
    fn test_dev_num_encode_pads_to_width() {
        let req = DevNumRequest {
            target_station_no: 130,
            device_number: "11223344".into(),
        };
        assert_eq!(
            req.encode().unwrap().as_ref(),
            bin("33 82 0B 00 31 31 32 32 33 33 34 34 00 00 54").as_slice()
        );
    }

    #[test]
    fn test_user_info_encode_known_vector() {
        let text: String = (0..10).map(|n| format!("{n}____.____")).collect();
        let req = UserInfoRequest {
            target_station_no: 1,
            user_info: text,
        };
        assert_eq!(
            req.encode().unwrap().as_ref(),
            bin("33 01 09 00 \
                 30 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 31 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 32 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 33 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 34 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 35 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 36 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 37 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 38 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 39 5F 5F 5F 5F 2E 5F 5F 5F 5F \
                 C6")
            .as_slice()
        );
    }

    #[test]
    fn test_raw_request_is_identity() {
        let req = RawRequest {
            payload: Bytes::from_static(&[0x11, 0x12, 0x13]),
            response_len: 3,
        };
        assert_eq!(req.encode().unwrap().as_ref(), &[0x11, 0x12, 0x13]);
        assert_eq!(req.response_len(), 3);
    }

    #[test]
    fn test_every_station_frame_ends_with_checksum_of_prefix() {
        let frames: Vec<Bytes> = vec![
            ParamPutRequest::new(7).encode().unwrap(),
            DataHeaderRequest {
                target_station_no: 7,
            }
            .encode()
            .unwrap(),
            DataBodyRequest {
                target_station_no: 7,
                page_no: 3,
                rec_count: 10,
            }
            .encode()
            .unwrap(),
            ClockSetRequest {
                target_station_no: 7,
                set_time: dt(2026, 8, 7, 12, 0, 0),
            }
            .encode()
            .unwrap(),
            DevNumRequest {
                target_station_no: 7,
                device_number: "42".into(),
            }
            .encode()
            .unwrap(),
            UserInfoRequest {
                target_station_no: 7,
                user_info: "cold room".into(),
            }
            .encode()
            .unwrap(),
        ];

        for frame in frames {
            let (body, tail) = frame.split_at(frame.len() - 1);
            assert_eq!(tail[0], crate::checksum::calculate(body));
        }
    }
}
