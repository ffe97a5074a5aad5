//! Dump the full stored history of a logger, oldest record first.

use rclog::Device;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Change to your serial port
    let port = std::env::var("RCLOG_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());

    println!("Reading history from {}...", port);

    let mut device = Device::new(&port);
    device.init()?;

    // Stream page by page instead of collecting the whole history
    let mut printed = 0usize;
    let mut print_page = |records: Vec<rclog::DataRecord>| {
        for record in &records {
            println!("{}", record);
        }
        printed += records.len();
    };

    device.get_data(None, Some(&mut print_page))?;

    println!("{} records read", printed);
    Ok(())
}
