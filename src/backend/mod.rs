//! Login-entry backends.
//!
//! Each supported OS has one backend implementing [`LaunchBackend`]. They are
//! gathered in the closed [`Backend`] enum, which is selected once from the
//! platform snapshot and never changes afterwards.

mod linux;
mod macos;
mod windows;

pub use linux::LinuxBackend;
pub use macos::MacBackend;
pub use windows::WindowsBackend;

use crate::config::{LaunchConfig, MacOptions};
use crate::error::{BackendError, Error, Result};
use crate::platform::{Os, PlatformInfo};
use auto_launch::{AutoLaunch, AutoLaunchBuilder};
use std::future::Future;

pub trait LaunchBackend {
    fn enable(
        &self,
        config: &LaunchConfig,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    fn disable(
        &self,
        app_name: &str,
        mac: &MacOptions,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// `Ok(false)` means there is no entry; `Err` means it could not be determined.
    fn is_enabled(
        &self,
        app_name: &str,
        mac: &MacOptions,
    ) -> impl Future<Output = Result<bool, BackendError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Linux(LinuxBackend),
    Mac(MacBackend),
    Windows(WindowsBackend),
}

impl Backend {
    pub fn os(&self) -> Os {
        match self {
            Backend::Linux(_) => Os::Linux,
            Backend::Mac(_) => Os::Mac,
            Backend::Windows(_) => Os::Windows,
        }
    }
}

/// Pick the backend for the detected OS.
pub fn select(platform: &PlatformInfo) -> Result<Backend> {
    match platform.os() {
        Some(Os::Linux) => Ok(Backend::Linux(LinuxBackend)),
        Some(Os::Mac) => Ok(Backend::Mac(MacBackend)),
        Some(Os::Windows) => Ok(Backend::Windows(WindowsBackend)),
        None => Err(Error::UnsupportedPlatform(platform.os_id().to_owned())),
    }
}

impl LaunchBackend for Backend {
    async fn enable(&self, config: &LaunchConfig) -> Result<(), BackendError> {
        match self {
            Backend::Linux(b) => b.enable(config).await,
            Backend::Mac(b) => b.enable(config).await,
            Backend::Windows(b) => b.enable(config).await,
        }
    }

    async fn disable(&self, app_name: &str, mac: &MacOptions) -> Result<(), BackendError> {
        match self {
            Backend::Linux(b) => b.disable(app_name, mac).await,
            Backend::Mac(b) => b.disable(app_name, mac).await,
            Backend::Windows(b) => b.disable(app_name, mac).await,
        }
    }

    async fn is_enabled(&self, app_name: &str, mac: &MacOptions) -> Result<bool, BackendError> {
        match self {
            Backend::Linux(b) => b.is_enabled(app_name, mac).await,
            Backend::Mac(b) => b.is_enabled(app_name, mac).await,
            Backend::Windows(b) => b.is_enabled(app_name, mac).await,
        }
    }
}

/// An `auto-launch` handle for one entry.
///
/// `auto-launch` only reads the path when writing an entry, so callers that
/// merely remove or query one may pass the name in its place.
fn system_entry(
    app_name: &str,
    app_path: &str,
    use_launch_agent: bool,
    args: &[&str],
) -> Result<AutoLaunch, BackendError> {
    AutoLaunchBuilder::new()
        .set_app_name(app_name)
        .set_app_path(app_path)
        .set_use_launch_agent(use_launch_agent)
        .set_args(args)
        .build()
        .map_err(BackendError::from)
}

/// Run a blocking `auto-launch` operation for `target`.
///
/// Inside a tokio runtime the call goes to its blocking pool. Any other
/// executor runs it inline on the polling thread.
async fn run_blocking<T, F>(target: Os, op: F) -> Result<T, BackendError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, BackendError> + Send + 'static,
{
    if Os::current() != Some(target) {
        return Err(BackendError::Unavailable(target));
    }
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle.spawn_blocking(op).await?,
        Err(_) => op(),
    }
}
