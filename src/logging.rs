use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Config;

/// Installs the logger. The terminal belongs to the UI, so records only go to
/// the configured log file.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file at path: {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .with_context(|| "Failed to install logger")?;

    Ok(())
}
