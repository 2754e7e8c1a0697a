use crate::runner::CommandRunner;
use std::fmt;
use std::path::Path;

/// Binary invoked for every sandbox operation.
pub const FLATPAK_BIN: &str = "flatpak";

/// Base SDK image the restore runs inside.
pub const SDK_ID: &str = "org.freedesktop.Sdk";

const REF_SEPARATOR: &str = "//";

/// An (application-id, branch) pair naming an installable runtime image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeRef {
    pub app_id: String,
    pub branch: String,
}

impl RuntimeRef {
    pub fn new(app_id: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            branch: branch.into(),
        }
    }

    /// The freedesktop SDK at the given branch.
    pub fn sdk(branch: &str) -> Self {
        Self::new(SDK_ID, branch)
    }

    /// The .NET language extension for the given major version.
    pub fn dotnet_extension(major: u32, branch: &str) -> Self {
        Self::new(format!("{SDK_ID}.Extension.dotnet{major}"), branch)
    }

    /// Exact match against one two-column line of `flatpak list` output.
    fn matches_line(&self, line: &str) -> bool {
        let mut fields = line.split('\t');
        fields.next() == Some(self.app_id.as_str())
            && fields.next() == Some(self.branch.as_str())
            && fields.next().is_none()
    }
}

impl fmt::Display for RuntimeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{REF_SEPARATOR}{}", self.app_id, self.branch)
    }
}

/// Report whether the runtime image is installed.
///
/// Lists installed runtime images in two-column (application, branch)
/// form, scoped to the per-user installation when `user_mode` is set, and
/// looks for an exact match. A failing or unspawnable `flatpak` counts as
/// not installed. One status line is printed either way; the missing form
/// carries the install hint. A single listing is authoritative.
pub fn check_runtime(runner: &dyn CommandRunner, runtime: &RuntimeRef, user_mode: bool) -> bool {
    let mut args: Vec<String> = vec!["list".to_owned()];
    if user_mode {
        args.push("--user".to_owned());
    }
    args.push("--runtime".to_owned());
    args.push("--columns=application,branch".to_owned());

    let installed = match runner.run(FLATPAK_BIN, &args) {
        Ok(output) if output.success() => {
            output.stdout.lines().any(|line| runtime.matches_line(line))
        }
        Ok(_) | Err(_) => false,
    };

    if installed {
        println!("[Found] {runtime}");
    } else {
        println!("[Missing] {runtime} (Install with 'flatpak install {runtime}')");
    }
    installed
}

/// Argument list for running `dotnet restore` inside the sandbox.
///
/// Telemetry and the first-run experience are disabled via environment
/// injection; network and the host filesystem are shared so the restore
/// can reach the registry and read the project; the package cache is
/// directed at `packages_dir`.
pub fn restore_args(
    dotnet_major: u32,
    branch: &str,
    packages_dir: &Path,
    project: &Path,
    user_mode: bool,
) -> Vec<String> {
    let mut args: Vec<String> = vec!["run".to_owned()];
    if user_mode {
        args.push("--user".to_owned());
    }
    args.extend([
        "--env=DOTNET_CLI_TELEMETRY_OPTOUT=true".to_owned(),
        "--env=DOTNET_SKIP_FIRST_TIME_EXPERIENCE=true".to_owned(),
        "--command=sh".to_owned(),
        format!("--runtime={}", RuntimeRef::sdk(branch)),
        "--share=network".to_owned(),
        "--filesystem=host".to_owned(),
        RuntimeRef::dotnet_extension(dotnet_major, branch).to_string(),
        "-c".to_owned(),
        format!(
            "PATH=\"${{PATH}}:/usr/lib/sdk/dotnet{dotnet_major}/bin\" \
             LD_LIBRARY_PATH=\"$LD_LIBRARY_PATH:/usr/lib/sdk/dotnet{dotnet_major}/lib\" \
             exec dotnet restore \"$@\""
        ),
        "--".to_owned(),
        "--packages".to_owned(),
        packages_dir.to_string_lossy().into_owned(),
        project.to_string_lossy().into_owned(),
    ]);
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRunner;
    use std::path::PathBuf;

    #[test]
    fn display_joins_id_and_branch() {
        let sdk = RuntimeRef::sdk("24.08");
        assert_eq!(sdk.to_string(), "org.freedesktop.Sdk//24.08");
    }

    #[test]
    fn dotnet_extension_ref() {
        let ext = RuntimeRef::dotnet_extension(9, "24.08");
        assert_eq!(
            ext.to_string(),
            "org.freedesktop.Sdk.Extension.dotnet9//24.08"
        );
    }

    #[test]
    fn found_when_listing_contains_exact_pair() {
        let runner = MockRunner::new();
        runner.push_success(
            "org.freedesktop.Platform\t24.08\norg.freedesktop.Sdk\t24.08\n",
        );
        assert!(check_runtime(&runner, &RuntimeRef::sdk("24.08"), false));
    }

    #[test]
    fn missing_when_branch_differs() {
        let runner = MockRunner::new();
        runner.push_success("org.freedesktop.Sdk\t23.08\n");
        assert!(!check_runtime(&runner, &RuntimeRef::sdk("24.08"), false));
    }

    #[test]
    fn partial_field_match_is_not_found() {
        // Three columns must not match a two-component ref
        let runner = MockRunner::new();
        runner.push_success("org.freedesktop.Sdk\t24.08\textra\n");
        assert!(!check_runtime(&runner, &RuntimeRef::sdk("24.08"), false));
    }

    #[test]
    fn listing_failure_reports_missing() {
        let runner = MockRunner::new();
        runner.push_failure(1, "error: no remotes configured");
        assert!(!check_runtime(&runner, &RuntimeRef::sdk("24.08"), false));
    }

    #[test]
    fn user_mode_scopes_the_listing() {
        let runner = MockRunner::new();
        runner.push_success("");
        check_runtime(&runner, &RuntimeRef::sdk("24.08"), true);

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "flatpak");
        assert_eq!(
            calls[0].1,
            vec!["list", "--user", "--runtime", "--columns=application,branch"]
        );
    }

    #[test]
    fn restore_args_shape() {
        let args = restore_args(
            8,
            "24.08",
            &PathBuf::from("/tmp/nuget-temp"),
            &PathBuf::from("/src/app.csproj"),
            false,
        );
        assert_eq!(args[0], "run");
        assert!(args.contains(&"--env=DOTNET_CLI_TELEMETRY_OPTOUT=true".to_owned()));
        assert!(args.contains(&"--env=DOTNET_SKIP_FIRST_TIME_EXPERIENCE=true".to_owned()));
        assert!(args.contains(&"--runtime=org.freedesktop.Sdk//24.08".to_owned()));
        assert!(args.contains(&"--share=network".to_owned()));
        assert!(args.contains(&"--filesystem=host".to_owned()));
        assert!(args.contains(&"org.freedesktop.Sdk.Extension.dotnet8//24.08".to_owned()));

        // The shell wrapper extends PATH with the extension's bin directory
        let script = &args[args.iter().position(|a| a == "-c").unwrap() + 1];
        assert!(script.contains("/usr/lib/sdk/dotnet8/bin"));
        assert!(script.contains("exec dotnet restore"));

        // Everything after `--` goes to dotnet restore itself
        let sep = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(
            &args[sep + 1..],
            &["--packages", "/tmp/nuget-temp", "/src/app.csproj"]
        );
    }

    #[test]
    fn restore_args_user_mode_inserted_after_run() {
        let args = restore_args(
            9,
            "25.08",
            &PathBuf::from("/tmp/p"),
            &PathBuf::from("/src/a.csproj"),
            true,
        );
        assert_eq!(&args[..2], &["run", "--user"]);
    }
}
