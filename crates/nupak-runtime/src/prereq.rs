use crate::flatpak::FLATPAK_BIN;
use crate::runner::CommandRunner;
use std::fmt;

/// A missing prerequisite with actionable install instructions.
#[derive(Debug)]
pub struct MissingPrereq {
    pub name: &'static str,
    pub purpose: &'static str,
    pub install_hint: &'static str,
}

impl fmt::Display for MissingPrereq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  - {}: {} (install: {})",
            self.name, self.purpose, self.install_hint
        )
    }
}

/// Flatpak exists only on Linux; every other host is unsupported.
pub fn host_supported() -> bool {
    cfg!(target_os = "linux")
}

/// Check host prerequisites. An empty list means the host is ready.
pub fn check_prereqs(runner: &dyn CommandRunner) -> Vec<MissingPrereq> {
    let mut missing = Vec::new();

    if !command_exists(runner, FLATPAK_BIN) {
        missing.push(MissingPrereq {
            name: "flatpak",
            purpose: "sandboxed dotnet restore and runtime image management",
            install_hint:
                "zypper install flatpak | apt install flatpak | dnf install flatpak | pacman -S flatpak",
        });
    }

    missing
}

/// Format a list of missing prerequisites into a user-facing message.
pub fn format_missing(missing: &[MissingPrereq]) -> String {
    use std::fmt::Write as _;
    let mut msg = String::from("missing prerequisites:\n");
    for m in missing {
        let _ = writeln!(msg, "{m}");
    }
    msg.push_str("\nNupak needs these tools to restore packages inside the sandbox.");
    msg
}

fn command_exists(runner: &dyn CommandRunner, name: &str) -> bool {
    runner
        .run("which", &[name.to_owned()])
        .map(|o| o.success())
        .unwrap_or(false)
}
