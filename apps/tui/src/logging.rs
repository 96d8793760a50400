use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use blankspot_tui::config::AppConfig;

/// Installs the global subscriber. The TUI logs to a file so the alternate
/// screen stays clean; headless runs log to stderr.
pub fn init_logging(config: &AppConfig, headless: bool) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to install logger: {e}"))?;
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install logger: {e}"))?;

    Ok(())
}
