use std::path::PathBuf;

/// Name of the transient cache directory created under the scratch parent.
const SCRATCH_SUBDIR: &str = "nuget-temp";

/// Immutable input bundle for one generate invocation, built once from
/// validated CLI input and owned by the pipeline for its lifetime.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Project manifest the restore runs against.
    pub project: PathBuf,
    /// Major version of the .NET SDK extension to restore with.
    pub dotnet_major: u32,
    /// Freedesktop runtime branch for both the SDK and the extension.
    pub branch: String,
    /// Parent directory for the transient package cache.
    pub scratch_parent: PathBuf,
    /// Also resolve the self-contained runtime packages.
    pub self_contained: bool,
    /// Scope flatpak operations to the per-user installation.
    pub user_mode: bool,
    /// Additional packages to resolve at their latest versions.
    pub extra_packages: Vec<String>,
    /// Subdirectory flatpak-builder downloads the packages into.
    pub dest_dir: String,
    /// Where the sources file goes; `None` means the default name.
    pub output: Option<String>,
}

impl GenerateRequest {
    /// The transient package cache directory for this invocation. Removed
    /// at the end of resolution, success or failure.
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_parent.join(SCRATCH_SUBDIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_dir_nests_under_parent() {
        let request = GenerateRequest {
            project: PathBuf::from("/src/app.csproj"),
            dotnet_major: 9,
            branch: "24.08".to_owned(),
            scratch_parent: PathBuf::from("/tmp/work"),
            self_contained: false,
            user_mode: false,
            extra_packages: Vec::new(),
            dest_dir: "nuget-sources".to_owned(),
            output: None,
        };
        assert_eq!(request.scratch_dir(), PathBuf::from("/tmp/work/nuget-temp"));
    }
}
