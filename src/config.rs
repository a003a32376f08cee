use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Argument appended to the registered command line for hidden launches.
pub const HIDDEN_ARG: &str = "--hidden";

/// macOS specific behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MacOptions {
    /// Register a file-based Launch Agent instead of an AppleScript Login Item.
    pub use_launch_agent: bool,
}

/// Options supplied by the application, as given on construction or loaded
/// from a TOML file.
///
/// e.g.:
///
/// ```toml
/// name = "MyApp"
/// path = "/Applications/MyApp.app"
/// is_hidden = true
///
/// [mac]
/// use_launch_agent = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutoLaunchOptions {
    pub name: Option<String>,
    pub is_hidden: bool,
    pub mac: MacOptions,
    pub path: Option<String>,
}

impl AutoLaunchOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    #[must_use]
    pub fn use_launch_agent(mut self, use_launch_agent: bool) -> Self {
        self.mac.use_launch_agent = use_launch_agent;
        self
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::InvalidArgument(format!("invalid options: {e}")))
    }

    /// Load the options from the supplied TOML file.
    pub async fn load(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        log::debug!("Loading launch options from file: {}", file.display());
        let contents = tokio::fs::read_to_string(file)
            .await
            .map_err(|source| Error::ReadOptions {
                path: file.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    pub(crate) fn required_name(&self) -> Result<&str> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(Error::InvalidArgument("You must specify a name".to_owned())),
        }
    }
}

/// The resolved entry handed to every backend call.
///
/// `path` is absolute without a trailing separator, `app_name` is a bare
/// file name without `.app` / `.exe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub path: String,
    pub app_name: String,
    pub is_hidden_on_launch: bool,
    pub mac: MacOptions,
}

impl LaunchConfig {
    /// Extra command line arguments registered with the entry.
    pub fn args(&self) -> &'static [&'static str] {
        if self.is_hidden_on_launch {
            &[HIDDEN_ARG]
        } else {
            &[]
        }
    }
}
