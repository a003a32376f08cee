//! Resolution and normalization of the application path.

use crate::config::MacOptions;
use crate::error::{Error, Result};
use crate::platform::{Os, PlatformInfo};
use regex::Regex;
use std::sync::LazyLock;

/// Matches the outermost `.app` bundle in a path.
///
/// `bundle` is everything up to and including `Name.app`, `name` is the
/// bundle name and `inner` the remainder inside the bundle, if any.
static BUNDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<bundle>(?:.*?/)?(?P<name>[^/]+)\.app)(?P<inner>/.+)?$").unwrap()
});

/// Executables inside a bundle that are not the application itself: the
/// Electron stub and Chromium helper apps under `Contents/Frameworks`.
static WRONG_EXECUTABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/Contents/(?:MacOS/Electron|Frameworks/[^/]+ Helper[^/]*\.app/Contents/MacOS/[^/]+)$")
        .unwrap()
});

/// Resolve the path that will be registered to run at login.
///
/// An explicit path must be absolute. Without one, the running executable is
/// used, which is only meaningful under NW.js or Electron where the host
/// process is the application itself.
pub fn resolve_path(
    explicit: Option<&str>,
    mac: &MacOptions,
    platform: &PlatformInfo,
) -> Result<String> {
    let resolved = match explicit.filter(|p| !p.is_empty()) {
        Some(path) if is_absolute(path, platform.os()) => path.to_owned(),
        Some(path) => {
            return Err(Error::InvalidArgument(format!(
                "path must be absolute, got '{path}'"
            )))
        }
        None if platform.host().is_some() => platform
            .exec_path()
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::UnsupportedOperation("could not determine the running executable".into())
            })?,
        None => {
            return Err(Error::UnsupportedOperation(
                "You must give a path (this is only auto-detected for NW.js and Electron apps)"
                    .into(),
            ))
        }
    };

    let resolved = if platform.is_mac() {
        fix_mac_executable_path(&resolved, mac)
    } else {
        resolved
    };

    Ok(strip_trailing_separator(&resolved, platform.os()).to_owned())
}

/// Point a macOS path at the executable inside its application bundle.
///
/// A bundle root (`/Applications/Foo.app`) becomes
/// `/Applications/Foo.app/Contents/MacOS/Foo`, and so do the Electron stub
/// and helper executables of that bundle. Any other path, inside a bundle or
/// not, is returned as is, minus a trailing `/`.
///
/// Login Items and Launch Agents both need the application's own executable,
/// so the result is the same for either setting of `mac`.
pub fn fix_mac_executable_path(path: &str, _mac: &MacOptions) -> String {
    let path = strip_trailing_separator(path, Some(Os::Mac));
    let Some(caps) = BUNDLE_RE.captures(path) else {
        return path.to_owned();
    };
    match caps.name("inner") {
        Some(inner) if !WRONG_EXECUTABLE_RE.is_match(inner.as_str()) => path.to_owned(),
        _ => format!("{}/Contents/MacOS/{}", &caps["bundle"], &caps["name"]),
    }
}

/// Remove a single trailing separator. Roots (`/`, `C:\`) are kept whole.
pub fn strip_trailing_separator(path: &str, os: Option<Os>) -> &str {
    let stripped = match os {
        Some(Os::Windows) => path
            .strip_suffix('\\')
            .or_else(|| path.strip_suffix('/')),
        _ => path.strip_suffix('/'),
    };
    match stripped {
        Some("") => path,
        Some(s) if os == Some(Os::Windows) && is_drive(s) => path,
        Some(s) => s,
        None => path,
    }
}

/// Whether `path` is absolute on `os`.
///
/// Windows accepts a drive letter followed by a separator, a UNC prefix, or a
/// rooted path on the current drive. Everything else uses POSIX rules.
pub fn is_absolute(path: &str, os: Option<Os>) -> bool {
    match os {
        Some(Os::Windows) => {
            let bytes = path.as_bytes();
            match bytes {
                [b'\\' | b'/', ..] => true,
                [_, b':', b'\\' | b'/', ..] => is_drive(&path[..2]),
                _ => false,
            }
        }
        _ => path.starts_with('/'),
    }
}

fn is_drive(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_trailing_separator_removed_once(p in "(/[a-zA-Z0-9 _.-]{1,12}){1,5}") {
            let with_slash = format!("{p}/");
            let fixed = fix_mac_executable_path(&with_slash, &MacOptions::default());
            prop_assert!(!fixed.ends_with('/'));
            prop_assert_eq!(
                fix_mac_executable_path(&fixed, &MacOptions::default()),
                fixed.clone()
            );
            if !BUNDLE_RE.is_match(&p) {
                prop_assert_eq!(fixed, p);
            }
        }

        #[test]
        fn prop_bundle_executable_is_fixed_point(
            prefix in "(/[a-zA-Z0-9 _-]{1,12}){0,3}",
            name in "[a-zA-Z0-9 _-]{1,16}",
            use_launch_agent in any::<bool>(),
        ) {
            let mac = MacOptions { use_launch_agent };
            let exe = format!("{prefix}/{name}.app/Contents/MacOS/{name}");
            prop_assert_eq!(fix_mac_executable_path(&exe, &mac), exe.clone());
            let bundle = format!("{prefix}/{name}.app");
            prop_assert_eq!(fix_mac_executable_path(&bundle, &mac), exe);
        }

        #[test]
        fn prop_fixup_is_idempotent(p in "(/[a-zA-Z0-9 _.-]{1,12}){1,6}/?", use_launch_agent in any::<bool>()) {
            let mac = MacOptions { use_launch_agent };
            let once = fix_mac_executable_path(&p, &mac);
            prop_assert_eq!(fix_mac_executable_path(&once, &mac), once.clone());
        }
    }
}
