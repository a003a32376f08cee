use crate::shared::logging_dir;
use anyhow::{Context, Result};
use flexi_logger::{detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

/// Start logging at `level` (default `info`, `debug` in debug builds).
///
/// Logs go to stderr unless `to_file` is set, in which case they are written
/// to a rotating file in the per-user config directory.
pub fn configure_logging(level: Option<&str>, to_file: bool) -> Result<LoggerHandle> {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let logger = Logger::try_with_str(level.unwrap_or(default_level))?;
    let handle = if to_file {
        let dir = logging_dir()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating logs directory {}", dir.display()))?;
        logger
            .log_to_file(FileSpec::default().directory(dir).basename("application"))
            .rotate(
                Criterion::Size(10_000_000),
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            )
            .format(detailed_format)
            .start()?
    } else {
        logger.start()?
    };
    Ok(handle)
}
