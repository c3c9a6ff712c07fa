use std::env;

use crate::lifecycle::Platform;

/// Installer events passed as the first argument by the Windows installer
/// (Squirrel) when it runs the app around install, update and uninstall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerEvent {
    Install,
    Updated,
    Uninstall,
    Obsolete,
}

impl InstallerEvent {
    const ALL: [Self; 4] = [Self::Install, Self::Updated, Self::Uninstall, Self::Obsolete];

    fn from_flag(flag: &str) -> Option<Self> {
        let flag = flag.trim();
        Self::ALL.into_iter().find(|event| event.as_flag() == flag)
    }

    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Install => "--squirrel-install",
            Self::Updated => "--squirrel-updated",
            Self::Uninstall => "--squirrel-uninstall",
            Self::Obsolete => "--squirrel-obsolete",
        }
    }
}

pub fn installer_event_from_args<I, S>(platform: Platform, args: I) -> Option<InstallerEvent>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if platform != Platform::Windows {
        return None;
    }

    let first_arg = args.into_iter().nth(1)?;
    InstallerEvent::from_flag(first_arg.as_ref())
}

/// Reads the process arguments for an installer event. Never fails: anything
/// unreadable counts as "no event".
pub fn detect_installer_event(platform: Platform) -> Option<InstallerEvent> {
    let args = env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    installer_event_from_args(platform, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_terminating_installer_flag_on_windows() {
        for event in InstallerEvent::ALL {
            assert_eq!(
                installer_event_from_args(Platform::Windows, ["lantern.exe", event.as_flag()]),
                Some(event)
            );
        }
    }

    #[test]
    fn firstrun_flag_is_a_normal_launch() {
        assert_eq!(
            installer_event_from_args(Platform::Windows, ["lantern.exe", "--squirrel-firstrun"]),
            None
        );
    }

    #[test]
    fn installer_flags_are_ignored_off_windows() {
        for platform in [Platform::MacOs, Platform::Linux, Platform::Other] {
            assert_eq!(
                installer_event_from_args(platform, ["lantern", "--squirrel-install"]),
                None
            );
        }
    }

    #[test]
    fn only_the_first_argument_is_inspected() {
        assert_eq!(
            installer_event_from_args(
                Platform::Windows,
                ["lantern.exe", "--verbose", "--squirrel-install"]
            ),
            None
        );
        assert_eq!(
            installer_event_from_args(Platform::Windows, Vec::<String>::new()),
            None
        );
    }
}
