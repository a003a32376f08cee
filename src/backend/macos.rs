//! macOS login entries.
//!
//! With `use_launch_agent` a plist is written to `~/Library/LaunchAgents`,
//! otherwise a Login Item is added via AppleScript (System Events).

use super::{run_blocking, system_entry, LaunchBackend};
use crate::config::{LaunchConfig, MacOptions};
use crate::error::BackendError;
use crate::platform::Os;
use log::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacBackend;

fn mechanism(mac: &MacOptions) -> &'static str {
    if mac.use_launch_agent {
        "Launch Agent"
    } else {
        "Login Item"
    }
}

impl LaunchBackend for MacBackend {
    async fn enable(&self, config: &LaunchConfig) -> Result<(), BackendError> {
        let LaunchConfig {
            path, app_name, mac, ..
        } = config.clone();
        let args = config.args();
        debug!("Adding {} for {app_name} ({path})", mechanism(&mac));
        run_blocking(Os::Mac, move || {
            system_entry(&app_name, &path, mac.use_launch_agent, args)?
                .enable()
                .map_err(BackendError::from)
        })
        .await
    }

    async fn disable(&self, app_name: &str, mac: &MacOptions) -> Result<(), BackendError> {
        let app_name = app_name.to_owned();
        let use_launch_agent = mac.use_launch_agent;
        debug!("Removing {} for {app_name}", mechanism(mac));
        run_blocking(Os::Mac, move || {
            system_entry(&app_name, &app_name, use_launch_agent, &[])?
                .disable()
                .map_err(BackendError::from)
        })
        .await
    }

    async fn is_enabled(&self, app_name: &str, mac: &MacOptions) -> Result<bool, BackendError> {
        let app_name = app_name.to_owned();
        let use_launch_agent = mac.use_launch_agent;
        run_blocking(Os::Mac, move || {
            system_entry(&app_name, &app_name, use_launch_agent, &[])?
                .is_enabled()
                .map_err(BackendError::from)
        })
        .await
    }
}
