//! Linux autostart entries (`~/.config/autostart/<name>.desktop`).

use super::{run_blocking, system_entry, LaunchBackend};
use crate::config::{LaunchConfig, MacOptions};
use crate::error::BackendError;
use crate::platform::Os;
use log::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinuxBackend;

impl LaunchBackend for LinuxBackend {
    async fn enable(&self, config: &LaunchConfig) -> Result<(), BackendError> {
        let LaunchConfig { path, app_name, .. } = config.clone();
        let args = config.args();
        debug!("Writing autostart entry for {app_name}");
        run_blocking(Os::Linux, move || {
            system_entry(&app_name, &path, false, args)?
                .enable()
                .map_err(BackendError::from)
        })
        .await
    }

    async fn disable(&self, app_name: &str, _mac: &MacOptions) -> Result<(), BackendError> {
        let app_name = app_name.to_owned();
        run_blocking(Os::Linux, move || {
            system_entry(&app_name, &app_name, false, &[])?
                .disable()
                .map_err(BackendError::from)
        })
        .await
    }

    async fn is_enabled(&self, app_name: &str, _mac: &MacOptions) -> Result<bool, BackendError> {
        let app_name = app_name.to_owned();
        run_blocking(Os::Linux, move || {
            system_entry(&app_name, &app_name, false, &[])?
                .is_enabled()
                .map_err(BackendError::from)
        })
        .await
    }
}
