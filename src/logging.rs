// src/logging.rs

use anyhow::{Context, Result};
use chrono::Local;
use std::{
    env,
    fs::File,
    io::Write,
    path::Path,
    sync::Mutex,
};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Install the run's subscriber: console at `RUST_LOG` (default `info`),
/// and everything down to `debug` in `log_path`.
pub fn init(log_path: &Path) -> Result<()> {
    let file = open_log_file(log_path)?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);
    let persistent = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(console)
        .with(persistent)
        .try_init()
        .context("installing tracing subscriber")?;

    info!(
        "Started on {} at {} running under {}",
        Local::now().format("%a %b %e %H:%M:%S %Y"),
        first_env(&["COMPUTERNAME", "HOSTNAME"]).unwrap_or_else(|| "UNKNOWN_COMPUTER".into()),
        first_env(&["USERNAME", "USER"]).unwrap_or_else(|| "UNKNOWN_USER".into()),
    );
    Ok(())
}

/// Truncate `log_path` and stamp it with the start time.
pub fn open_log_file(log_path: &Path) -> Result<File> {
    let mut file = File::create(log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;
    writeln!(
        file,
        "Starting on {}",
        Local::now().format("%a %b %e %H:%M:%S %Y")
    )
    .with_context(|| format!("writing log file {}", log_path.display()))?;
    Ok(file)
}

fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| env::var(k).ok().filter(|v| !v.is_empty()))
}
