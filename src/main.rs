//! Contact Book - main entry point.

use anyhow::Result;
use contact_book::{repl, Config};
use std::io::{stdin, stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout belongs to the session)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact book (birthday window: {} days)",
        config.birthday_window_days
    );

    let stdin = stdin();
    let mut input = stdin.lock();
    let mut output = stdout();
    repl::run(&config, &mut input, &mut output)?;

    info!("Contact book session ended");
    Ok(())
}
