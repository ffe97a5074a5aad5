//! Protocol constants

/// Marker byte opening every station-addressed request
pub const REQUEST_MARKER: u8 = 0x33;

/// Marker byte opening every structured response (discarded, not verified)
pub const RESPONSE_MARKER: u8 = 0x55;

/// Fixed init request frame, checksum included
pub const INIT_REQUEST: [u8; 5] = [0xCC, 0x00, 0x0A, 0x00, 0xD6];

/// Fixed device-info request frame, checksum included
pub const DEVINFO_REQUEST: [u8; 5] = [0xCC, 0x00, 0x06, 0x00, 0xD2];

/// Opaque acknowledgement length shared by the write-style responses
pub const ACK_LEN: usize = 3;

/// Device-info response length
pub const DEVINFO_LEN: usize = 160;

/// Data-header response length
pub const DATA_HEADER_LEN: usize = 11;

/// Station-addressed command codes
pub const CMD_DATA_HEADER: u8 = 0x01;
pub const CMD_DATA_BODY: u8 = 0x02;
pub const CMD_PARAM_PUT: u8 = 0x05;
pub const CMD_CLOCK_SET: u8 = 0x07;
pub const CMD_USER_INFO: u8 = 0x09;
pub const CMD_DEV_NUM: u8 = 0x0B;

/// Model numbers with a known page size
pub const MODEL_RC4: u8 = 40;
pub const MODEL_RC5: u8 = 50;

/// Records per data-body page, fixed per hardware model
pub const PAGE_SIZE_RC4: u16 = 100;
pub const PAGE_SIZE_RC5: u16 = 500;

/// Fixed-width string field lengths
pub const USER_INFO_LEN: usize = 100;
pub const DEV_NUM_LEN: usize = 10;

/// Serial link default for the logger cradle
pub const DEFAULT_BAUD_RATE: u32 = 115_000;

/// Default serial read timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default settle delay between sessions (milliseconds)
pub const DEFAULT_SETTLE_MS: u64 = 500;
