use anyhow::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger. Defaults to `warn`, `RUST_LOG` overrides it.
pub fn configure_app() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
