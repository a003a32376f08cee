//! Launch the running desktop application at user login.
//!
//! [`AutoLaunch`] resolves the application's executable path and name for the
//! current platform and registers it with the OS:
//!
//! - Linux: an autostart `.desktop` file
//! - macOS: a Launch Agent or a Login Item
//! - Windows: a value under the registry `Run` key
//!
//! ```no_run
//! use launch_at_login::{AutoLaunch, AutoLaunchOptions};
//!
//! # async fn run() -> launch_at_login::Result<()> {
//! let launcher = AutoLaunch::new(
//!     AutoLaunchOptions::new("MyApp").path("/Applications/MyApp.app"),
//! )?;
//! if !launcher.is_enabled().await? {
//!     launcher.enable().await?;
//! }
//! # Ok(())
//! # }
//! ```

mod app_name;
pub mod backend;
mod config;
mod error;
pub mod path;
pub mod platform;

pub use app_name::app_name;
pub use backend::{Backend, LaunchBackend};
pub use config::{AutoLaunchOptions, LaunchConfig, MacOptions, HIDDEN_ARG};
pub use error::{BackendError, Error, Result};
pub use platform::{Host, Os, PlatformInfo, RuntimeVersions};

use log::{debug, error, info};

/// A login entry for one application.
///
/// Everything is resolved when the value is constructed; the operations only
/// forward the resolved [`LaunchConfig`] to the backend.
#[derive(Debug)]
pub struct AutoLaunch<B = Backend> {
    config: LaunchConfig,
    platform: PlatformInfo,
    backend: B,
}

impl AutoLaunch {
    /// Resolve `opts` against the running process.
    pub fn new(opts: AutoLaunchOptions) -> Result<Self> {
        opts.required_name()?;
        Self::with_platform(opts, PlatformInfo::detect())
    }

    /// Resolve `opts` against a given platform snapshot.
    pub fn with_platform(opts: AutoLaunchOptions, platform: PlatformInfo) -> Result<Self> {
        let config = resolve_config(&opts, &platform)?;
        let backend = backend::select(&platform)?;
        debug!("Selected {} backend", backend.os());
        Ok(Self {
            config,
            platform,
            backend,
        })
    }
}

impl<B: LaunchBackend> AutoLaunch<B> {
    /// Resolve `opts` against `platform`, using `backend` instead of the
    /// platform's own.
    pub fn with_backend(
        opts: AutoLaunchOptions,
        platform: PlatformInfo,
        backend: B,
    ) -> Result<Self> {
        let config = resolve_config(&opts, &platform)?;
        Ok(Self {
            config,
            platform,
            backend,
        })
    }

    /// Register the entry so the application starts at login.
    ///
    /// # Errors
    ///
    /// [`Error::Backend`] if the OS entry could not be written.
    pub async fn enable(&self) -> Result<()> {
        info!("Enabling launch at login for {}", self.config.app_name);
        self.backend
            .enable(&self.config)
            .await
            .inspect_err(|e| error!("Error enabling launch at login: {e}"))?;
        Ok(())
    }

    /// Remove the entry.
    ///
    /// # Errors
    ///
    /// [`Error::Backend`] if the OS entry could not be removed.
    pub async fn disable(&self) -> Result<()> {
        info!("Disabling launch at login for {}", self.config.app_name);
        self.backend
            .disable(&self.config.app_name, &self.config.mac)
            .await
            .inspect_err(|e| error!("Error disabling launch at login: {e}"))?;
        Ok(())
    }

    /// Whether the entry is registered. `Ok(false)` means there is none.
    ///
    /// # Errors
    ///
    /// [`Error::Backend`] if the OS could not be queried.
    pub async fn is_enabled(&self) -> Result<bool> {
        let enabled = self
            .backend
            .is_enabled(&self.config.app_name, &self.config.mac)
            .await?;
        debug!("Launch at login for {}: {enabled}", self.config.app_name);
        Ok(enabled)
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn platform(&self) -> &PlatformInfo {
        &self.platform
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn app_name(&self) -> &str {
        &self.config.app_name
    }

    pub fn path(&self) -> &str {
        &self.config.path
    }
}

fn resolve_config(opts: &AutoLaunchOptions, platform: &PlatformInfo) -> Result<LaunchConfig> {
    let name = opts.required_name()?;
    let path = path::resolve_path(opts.path.as_deref(), &opts.mac, platform)?;
    let mut app_name = app_name(&path, platform);
    if app_name.is_empty() {
        app_name = name.to_owned();
    }
    debug!("Resolved {app_name} to {path}");
    Ok(LaunchConfig {
        path,
        app_name,
        is_hidden_on_launch: opts.is_hidden,
        mac: opts.mac.clone(),
    })
}
