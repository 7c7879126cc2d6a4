use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

// The TUI owns the terminal, so diagnostics go to a rolling file under the
// data directory instead of stdout/stderr.
static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts file-based logging under `<base_dir>/logs`, once per process.
///
/// Level defaults to `info` and honors the `RUST_LOG` environment variable.
/// Calling this again is a no-op.
pub fn init(base_dir: Option<PathBuf>) -> Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let dir = match base_dir {
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?
            .join(".tickli"),
    };
    let log_dir = dir.join("logs");
    fs::create_dir_all(&log_dir)?;

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename("tickli")
                .suppress_timestamp(),
        )
        .append()
        .start()?;

    let _ = LOGGER.set(handle);
    Ok(())
}
