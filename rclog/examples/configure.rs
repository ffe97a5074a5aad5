//! Sync the clock and tighten the recording interval of a logger.

use chrono::NaiveTime;
use rclog::{Device, ParamPutRequest};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let port = std::env::var("RCLOG_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());

    let mut device = Device::new(&port);
    device.init()?;

    let info = device.get_devinfo()?;
    println!("Before: {}", info);

    // Set the device clock to the host's current time
    device.set_clock(info.station_no, None)?;

    // Keep the device's settings but record every 30 seconds
    let mut request = ParamPutRequest::from_device_info(&info);
    request.rec_interval = NaiveTime::from_hms_opt(0, 0, 30).expect("valid interval");
    device.update(&request)?;

    let info = device.get_devinfo()?;
    println!("After: {}", info);

    Ok(())
}
