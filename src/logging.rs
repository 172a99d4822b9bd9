//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file instead.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file used when none is given on the command line
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("grid_snake.log")
}

/// Install a global subscriber appending to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logs_land_in_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.log");

        init(&path).unwrap();
        tracing::info!(score = 40, "session over");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("session over"));
        assert!(written.contains("score=40"));
    }
}
