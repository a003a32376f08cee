use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "launch-at-login";

pub fn app_config_dir() -> Result<PathBuf> {
    let mut path = dirs::config_dir().with_context(|| "Could not find config directory")?;
    path.push(APP_NAME);
    Ok(path)
}

pub fn logging_dir() -> Result<PathBuf> {
    let mut path = app_config_dir()?;
    path.push("logs");
    Ok(path)
}
