use crate::platform::{Os, PlatformInfo};

/// The bare application name for a resolved path: its last segment without
/// the `.app` (macOS) or `.exe` (Windows) extension.
pub fn app_name(path: &str, platform: &PlatformInfo) -> String {
    let last = match platform.os() {
        Some(Os::Windows) => path.rsplit(['\\', '/']).next(),
        _ => path.rsplit('/').next(),
    }
    .unwrap_or(path);

    let stripped = match platform.os() {
        Some(Os::Mac) => last.strip_suffix(".app"),
        Some(Os::Windows) => last.strip_suffix(".exe"),
        _ => None,
    };
    stripped.unwrap_or(last).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_on(os: Os, path: &str) -> String {
        app_name(path, &PlatformInfo::new(os, None))
    }

    #[test]
    fn mac_strips_app_extension() {
        assert_eq!(name_on(Os::Mac, "/Applications/Foo.app"), "Foo");
        assert_eq!(
            name_on(Os::Mac, "/Applications/Foo.app/Contents/MacOS/Foo"),
            "Foo"
        );
    }

    #[test]
    fn windows_strips_exe_extension() {
        assert_eq!(name_on(Os::Windows, r"C:\Program Files\Foo\Foo.exe"), "Foo");
        assert_eq!(name_on(Os::Windows, "C:/Program Files/Foo/Foo.exe"), "Foo");
        assert_eq!(name_on(Os::Windows, r"C:\Tools\foo-cli"), "foo-cli");
    }

    #[test]
    fn linux_keeps_the_file_name() {
        assert_eq!(name_on(Os::Linux, "/usr/bin/foo"), "foo");
        assert_eq!(name_on(Os::Linux, "/opt/Foo.app"), "Foo.app");
        assert_eq!(name_on(Os::Linux, "/opt/foo.exe"), "foo.exe");
    }

    #[test]
    fn only_the_trailing_extension_is_removed() {
        assert_eq!(name_on(Os::Mac, "/Applications/My.app.Beta"), "My.app.Beta");
        assert_eq!(name_on(Os::Windows, r"C:\bin\Foo.exe.exe"), "Foo.exe");
        assert_eq!(name_on(Os::Windows, r"C:\bin\Foo.EXE"), "Foo.EXE");
    }

    #[test]
    fn unsupported_platforms_split_on_slash() {
        let platform = PlatformInfo::from_facts("freebsd", &Default::default(), None);
        assert_eq!(app_name("/usr/local/bin/foo", &platform), "foo");
    }
}
