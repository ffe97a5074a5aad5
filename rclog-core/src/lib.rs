//! # rclog-core
//!
//! Core protocol implementation for the RC-4/RC-5 temperature logger
//! family.
//!
//! This crate provides the low-level protocol primitives:
//! - Value codecs (timestamps, intervals, start delay)
//! - Frame checksum
//! - The message catalog (one encode/decode pair per request/response)
//! - Protocol constants

pub mod checksum;
pub mod codec;
pub mod constants;
pub mod error;
pub mod message;

pub use error::{Error, Result};
pub use message::{
    Ack, ClockSetRequest, DataBodyRequest, DataBodyResponse, DataHeaderRequest,
    DataHeaderResponse, DevInfoRequest, DevNumRequest, InitRequest, ParamPutRequest, RawRequest,
    Request, Response, UserInfoRequest,
};
