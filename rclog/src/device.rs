//! High-level device interface

use std::thread;
use std::time::Duration;

use bytes::Bytes;
use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use tracing::{debug, info, trace};

use rclog_core::constants::{
    DEFAULT_SETTLE_MS, MODEL_RC4, MODEL_RC5, PAGE_SIZE_RC4, PAGE_SIZE_RC5,
};
use rclog_core::{
    Ack, ClockSetRequest, DataBodyRequest, DataHeaderRequest, DataHeaderResponse, DevInfoRequest,
    DevNumRequest, InitRequest, ParamPutRequest, RawRequest, Request, Response, UserInfoRequest,
};
use rclog_transport::{SerialTransport, Transport};
use rclog_types::{DataRecord, DeviceInfo};

use crate::error::{Error, Result};

/// RC-4/RC-5 temperature logger.
///
/// High-level interface for one logger on a serial link. Every operation
/// is a complete session: the port is opened, one or more request/response
/// exchanges run, and the port is closed again followed by a settle delay
/// the hardware needs before it accepts the next session. Cleanup runs on
/// every exit path, including failures.
///
/// # Examples
///
/// ```no_run
/// use rclog::Device;
///
/// fn main() -> rclog::Result<()> {
///     let mut device = Device::new("/dev/ttyUSB0");
///
///     device.init()?;
///     let info = device.get_devinfo()?;
///     println!("Device: {}", info);
///
///     for record in device.get_data(None, None)? {
///         println!("{}", record);
///     }
///     Ok(())
/// }
/// ```
pub struct Device {
    transport: Box<dyn Transport>,
    settle: Duration,
}

impl Device {
    /// Create a device on a serial port path (e.g. `/dev/ttyUSB0`).
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_transport(SerialTransport::new(path))
    }

    /// Create a device over a caller-supplied transport.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
        }
    }

    /// Set the settle delay honored after every session (default 500 ms).
    pub fn with_settle_time(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Wake the device up.
    pub fn init(&mut self) -> Result<Ack> {
        info!("Initializing device...");
        self.with_port(|dev| dev.exchange(&InitRequest))
    }

    /// Query the device's information snapshot.
    pub fn get_devinfo(&mut self) -> Result<DeviceInfo> {
        debug!("Querying device info...");

        let info = self.with_port(|dev| dev.exchange(&DevInfoRequest))?;

        debug!("Device info: {}", info);
        Ok(info)
    }

    /// Send a parameter update.
    pub fn update(&mut self, request: &ParamPutRequest) -> Result<Ack> {
        info!(
            "Updating parameters on station {}...",
            request.target_station_no
        );
        self.with_port(|dev| dev.exchange(request))
    }

    /// Query the stored-record count and session start time of a station.
    pub fn get_data_header(&mut self, target_station_no: u8) -> Result<DataHeaderResponse> {
        debug!("Querying data header for station {}...", target_station_no);
        self.with_port(|dev| dev.exchange(&DataHeaderRequest { target_station_no }))
    }

    /// Retrieve the full stored history, oldest record first.
    ///
    /// Page size is inferred from the model number unless overridden.
    /// With a callback, each page's records are handed over as they are
    /// decoded and the final return value is empty; without one, the full
    /// ordered list is accumulated and returned.
    pub fn get_data(
        &mut self,
        page_size: Option<u16>,
        mut callback: Option<&mut dyn FnMut(Vec<DataRecord>)>,
    ) -> Result<Vec<DataRecord>> {
        let info = self.get_devinfo()?;
        let header = self.get_data_header(info.station_no)?;

        let page_size = match page_size {
            Some(size) => size,
            None => Self::page_size_for(info.model_no)?,
        };
        let rec_count = header.rec_count;
        let pages = rec_count.div_ceil(page_size);
        let delta = Self::interval_delta(&info)?;
        let start_time = Self::start_time(&info)?;

        info!(
            "Retrieving {} records from station {} in {} pages...",
            rec_count, info.station_no, pages
        );

        self.with_port(|dev| {
            let mut records = Vec::new();
            let mut seq: u32 = 1;
            let mut timestamp = start_time;

            for page_no in 0..pages {
                let body = dev.exchange(&DataBodyRequest {
                    target_station_no: info.station_no,
                    page_no: Self::page_index(page_no)?,
                    rec_count: Self::page_fill(page_no, page_size, rec_count),
                })?;

                for raw in body.values {
                    records.push(DataRecord {
                        seq,
                        timestamp,
                        value: raw as f64 / 10.0,
                    });
                    seq += 1;
                    timestamp = timestamp + delta;
                }

                if let Some(cb) = callback.as_mut() {
                    cb(std::mem::take(&mut records));
                }
            }

            Ok(records)
        })
    }

    /// Retrieve only the most recent record.
    ///
    /// Reads just the page containing the final record instead of the full
    /// history; the record's sequence number and timestamp are
    /// reconstructed from the header count.
    pub fn get_latest(
        &mut self,
        page_size: Option<u16>,
        mut callback: Option<&mut dyn FnMut(&DataRecord)>,
    ) -> Result<DataRecord> {
        let info = self.get_devinfo()?;
        let header = self.get_data_header(info.station_no)?;

        let page_size = match page_size {
            Some(size) => size,
            None => Self::page_size_for(info.model_no)?,
        };
        let rec_count = header.rec_count;
        if rec_count == 0 {
            return Err(Error::NoRecords);
        }

        let delta = Self::interval_delta(&info)?;
        let timestamp = Self::start_time(&info)? + delta * (rec_count as i32 - 1);

        let last_page = rec_count.div_ceil(page_size) - 1;

        debug!(
            "Retrieving latest of {} records from page {}...",
            rec_count, last_page
        );

        let latest = self.with_port(|dev| {
            let body = dev.exchange(&DataBodyRequest {
                target_station_no: info.station_no,
                page_no: Self::page_index(last_page)?,
                rec_count: Self::page_fill(last_page, page_size, rec_count),
            })?;

            let raw = body.values.last().copied().ok_or(Error::NoRecords)?;

            Ok(DataRecord {
                seq: rec_count as u32,
                timestamp,
                value: raw as f64 / 10.0,
            })
        })?;

        if let Some(cb) = callback.as_mut() {
            cb(&latest);
        }
        Ok(latest)
    }

    /// Set the device clock; `None` uses the host's current local time.
    pub fn set_clock(&mut self, station_no: u8, set_time: Option<NaiveDateTime>) -> Result<Ack> {
        let set_time = set_time.unwrap_or_else(|| Local::now().naive_local());

        info!("Setting clock on station {} to {}...", station_no, set_time);

        self.with_port(|dev| {
            dev.exchange(&ClockSetRequest {
                target_station_no: station_no,
                set_time,
            })
        })
    }

    /// Write the device serial number.
    pub fn set_device_number(&mut self, station_no: u8, device_number: &str) -> Result<Ack> {
        info!("Setting device number on station {}...", station_no);

        self.with_port(|dev| {
            dev.exchange(&DevNumRequest {
                target_station_no: station_no,
                device_number: device_number.to_string(),
            })
        })
    }

    /// Write the free-text user info field.
    pub fn set_user_info(&mut self, station_no: u8, user_info: &str) -> Result<Ack> {
        info!("Setting user info on station {}...", station_no);

        self.with_port(|dev| {
            dev.exchange(&UserInfoRequest {
                target_station_no: station_no,
                user_info: user_info.to_string(),
            })
        })
    }

    /// Send caller-supplied bytes and read back an opaque reply.
    ///
    /// Unlike the typed exchanges, the reply is whatever arrives within
    /// the transport's timeout, up to `response_len` bytes.
    pub fn raw_send(&mut self, request_bytes: Bytes, response_len: usize) -> Result<Bytes> {
        debug!(
            "Raw exchange: {} bytes out, up to {} back",
            request_bytes.len(),
            response_len
        );

        self.with_port(|dev| {
            let request = RawRequest {
                payload: request_bytes.clone(),
                response_len,
            };

            let frame = request.encode().map_err(Error::from)?;
            trace!(frame = %hex::encode(&frame), "raw request");

            dev.transport.write(&frame)?;
            let response = dev.transport.read(response_len)?;
            trace!(response = %hex::encode(&response), "raw response");

            let ack = Ack::decode(&response).map_err(Error::from)?;
            Ok(ack.msg)
        })
    }

    // Helper methods

    /// Run `body` with the port held, then release it and give the device
    /// its settle time. Cleanup is unconditional.
    fn with_port<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let result = match self.transport.open() {
            Ok(()) => body(self),
            Err(e) => Err(e.into()),
        };

        self.transport.close();
        thread::sleep(self.settle);

        result
    }

    /// One request/response exchange. The response is read at exactly the
    /// length the message kind dictates; a short read is an error.
    fn exchange<R: Request>(&mut self, request: &R) -> Result<R::Response> {
        let frame = request.encode().map_err(Error::from)?;
        trace!(frame = %hex::encode(&frame), "request");

        self.transport.write(&frame)?;

        let expected = request.response_len();
        let response = self.transport.read(expected)?;
        trace!(response = %hex::encode(&response), "response");

        if response.len() < expected {
            return Err(rclog_core::Error::ResponseTooShort {
                expected,
                actual: response.len(),
            }
            .into());
        }

        R::Response::decode(&response).map_err(Error::from)
    }

    /// Records per page, fixed per hardware model.
    fn page_size_for(model_no: u8) -> Result<u16> {
        match model_no {
            MODEL_RC4 => Ok(PAGE_SIZE_RC4),
            MODEL_RC5 => Ok(PAGE_SIZE_RC5),
            other => Err(Error::UnsupportedModel(other)),
        }
    }

    /// Records expected on one page: every page is full except the last,
    /// which carries the remainder. An exact multiple fills the last page
    /// completely (the boundary test is <=, not <).
    fn page_fill(page_no: u16, page_size: u16, rec_count: u16) -> u16 {
        if (page_no as u32 + 1) * page_size as u32 <= rec_count as u32 {
            page_size
        } else {
            rec_count % page_size
        }
    }

    /// The wire carries the page index in a single byte.
    fn page_index(page_no: u16) -> Result<u8> {
        u8::try_from(page_no).map_err(|_| {
            Error::InvalidResponse(format!("page index {page_no} exceeds the protocol page field"))
        })
    }

    fn interval_delta(info: &DeviceInfo) -> Result<TimeDelta> {
        let interval = info.rec_interval.ok_or_else(|| {
            Error::InvalidResponse("device info has no recording interval".into())
        })?;

        Ok(TimeDelta::hours(interval.hour() as i64)
            + TimeDelta::minutes(interval.minute() as i64)
            + TimeDelta::seconds(interval.second() as i64))
    }

    fn start_time(info: &DeviceInfo) -> Result<NaiveDateTime> {
        info.start_time.ok_or_else(|| {
            Error::InvalidResponse("device info has no recording start time".into())
        })
    }
}
