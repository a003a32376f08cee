//! Platform detection.
//!
//! Everything the library needs to know about the running process is read
//! once into a [`PlatformInfo`] snapshot, which is then passed explicitly to
//! path resolution, name extraction and backend selection.

use std::collections::BTreeMap;
use std::fmt;

/// Runtime markers that identify a desktop host, checked in this order.
const HOST_MARKERS: &[&str] = &["nw", "node-webkit", "electron"];

/// Operating systems with a login-entry backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Mac,
    Windows,
}

impl Os {
    /// The OS this binary was compiled for, if it is one of the supported three.
    pub fn current() -> Option<Self> {
        classify_os(os_identifier())
    }

    pub fn name(self) -> &'static str {
        match self {
            Os::Linux => "Linux",
            Os::Mac => "macOS",
            Os::Windows => "Windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Desktop runtimes that can report the application's executable themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// NW.js (formerly node-webkit).
    NodeWebkit,
    Electron,
}

/// Version markers exported by the hosting runtime, keyed by marker name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeVersions(BTreeMap<String, String>);

impl RuntimeVersions {
    /// Collect the markers from the environment.
    ///
    /// A marker `electron` is read from `ELECTRON_VERSION`, `node-webkit`
    /// from `NODE_WEBKIT_VERSION`, and so on.
    pub fn current() -> Self {
        HOST_MARKERS
            .iter()
            .filter_map(|marker| {
                std::env::var(marker_env_var(marker))
                    .ok()
                    .filter(|v| !v.is_empty())
                    .map(|v| ((*marker).to_owned(), v))
            })
            .collect()
    }

    #[must_use]
    pub fn with(mut self, marker: &str, version: &str) -> Self {
        self.0.insert(marker.to_owned(), version.to_owned());
        self
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains_key(marker)
    }
}

impl FromIterator<(String, String)> for RuntimeVersions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Immutable facts about the running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    os_id: String,
    os: Option<Os>,
    host: Option<Host>,
    exec_path: Option<String>,
}

impl PlatformInfo {
    /// Snapshot the current process.
    pub fn detect() -> Self {
        let exec_path = std::env::current_exe()
            .ok()
            .map(|p| p.to_string_lossy().into_owned());
        Self::from_facts(os_identifier(), &RuntimeVersions::current(), exec_path)
    }

    /// Classify an OS identifier (`darwin`, `win32`, `linux`, ...) and a set of
    /// runtime markers.
    pub fn from_facts(
        os_id: &str,
        versions: &RuntimeVersions,
        exec_path: Option<String>,
    ) -> Self {
        Self {
            os_id: os_id.to_owned(),
            os: classify_os(os_id),
            host: classify_host(versions),
            exec_path,
        }
    }

    /// A synthetic snapshot for a known OS and host, with no running executable.
    pub fn new(os: Os, host: Option<Host>) -> Self {
        let os_id = match os {
            Os::Linux => "linux",
            Os::Mac => "darwin",
            Os::Windows => "win32",
        };
        Self {
            os_id: os_id.to_owned(),
            os: Some(os),
            host,
            exec_path: None,
        }
    }

    #[must_use]
    pub fn with_exec_path(mut self, exec_path: impl Into<String>) -> Self {
        self.exec_path = Some(exec_path.into());
        self
    }

    pub fn os_id(&self) -> &str {
        &self.os_id
    }

    pub fn os(&self) -> Option<Os> {
        self.os
    }

    pub fn host(&self) -> Option<Host> {
        self.host
    }

    pub fn exec_path(&self) -> Option<&str> {
        self.exec_path.as_deref()
    }

    pub fn is_linux(&self) -> bool {
        self.os == Some(Os::Linux)
    }

    pub fn is_mac(&self) -> bool {
        self.os == Some(Os::Mac)
    }

    pub fn is_windows(&self) -> bool {
        self.os == Some(Os::Windows)
    }

    pub fn is_nw(&self) -> bool {
        self.host == Some(Host::NodeWebkit)
    }

    pub fn is_electron(&self) -> bool {
        self.host == Some(Host::Electron)
    }
}

/// Node-style identifier of the compile target (`darwin`, `win32`, `linux`).
pub fn os_identifier() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

fn classify_os(os_id: &str) -> Option<Os> {
    if os_id.contains("darwin") {
        Some(Os::Mac)
    } else if os_id.starts_with("win") {
        Some(Os::Windows)
    } else if os_id.contains("linux") {
        Some(Os::Linux)
    } else {
        None
    }
}

fn classify_host(versions: &RuntimeVersions) -> Option<Host> {
    if versions.contains("nw") || versions.contains("node-webkit") {
        Some(Host::NodeWebkit)
    } else if versions.contains("electron") {
        Some(Host::Electron)
    } else {
        None
    }
}

fn marker_env_var(marker: &str) -> String {
    format!("{}_VERSION", marker.to_uppercase().replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(os_id: &str) -> PlatformInfo {
        PlatformInfo::from_facts(os_id, &RuntimeVersions::default(), None)
    }

    #[test]
    fn darwin_is_mac() {
        let info = detect("darwin");
        assert!(info.is_mac());
        assert!(!info.is_windows());
        assert!(!info.is_linux());
    }

    #[test]
    fn win_prefix_is_windows() {
        assert!(detect("win32").is_windows());
        assert!(detect("win64").is_windows());
        assert!(!detect("Win32").is_windows(), "prefix match is case-sensitive");
        assert!(!detect("cygwin").is_windows());
    }

    #[test]
    fn linux_is_linux() {
        let info = detect("linux");
        assert!(info.is_linux());
        assert!(!info.is_mac());
        assert!(!info.is_windows());
    }

    #[test]
    fn unknown_os_has_no_flags() {
        let info = detect("freebsd");
        assert_eq!(info.os(), None);
        assert_eq!(info.os_id(), "freebsd");
    }

    #[test]
    fn host_markers() {
        let nw = RuntimeVersions::default().with("nw", "0.80.0");
        assert_eq!(
            PlatformInfo::from_facts("linux", &nw, None).host(),
            Some(Host::NodeWebkit)
        );

        let legacy = RuntimeVersions::default().with("node-webkit", "0.8.6");
        assert!(PlatformInfo::from_facts("linux", &legacy, None).is_nw());

        let electron = RuntimeVersions::default().with("electron", "31.0.0");
        let info = PlatformInfo::from_facts("darwin", &electron, None);
        assert!(info.is_electron());
        assert!(!info.is_nw());

        assert_eq!(detect("linux").host(), None);
    }

    #[test]
    fn nw_wins_over_electron() {
        let both = RuntimeVersions::default()
            .with("electron", "31.0.0")
            .with("nw", "0.80.0");
        let info = PlatformInfo::from_facts("win32", &both, None);
        assert_eq!(info.host(), Some(Host::NodeWebkit));
    }

    #[test]
    fn host_is_independent_of_os() {
        let electron = RuntimeVersions::default().with("electron", "31.0.0");
        let info = PlatformInfo::from_facts("plan9", &electron, None);
        assert_eq!(info.os(), None);
        assert!(info.is_electron());
    }

    #[test]
    fn marker_env_var_names() {
        assert_eq!(marker_env_var("nw"), "NW_VERSION");
        assert_eq!(marker_env_var("node-webkit"), "NODE_WEBKIT_VERSION");
        assert_eq!(marker_env_var("electron"), "ELECTRON_VERSION");
    }

    #[test]
    fn detect_returns_populated_snapshot() {
        let info = PlatformInfo::detect();
        assert_eq!(info.os_id(), os_identifier());
        assert_eq!(info.os(), Os::current());
        assert!(info.exec_path().is_some());
    }

    #[test]
    fn synthetic_snapshot_matches_detection() {
        for os in [Os::Linux, Os::Mac, Os::Windows] {
            let synthetic = PlatformInfo::new(os, None);
            assert_eq!(detect(synthetic.os_id()), synthetic);
        }
    }
}
