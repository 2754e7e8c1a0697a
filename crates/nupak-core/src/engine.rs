use crate::request::GenerateRequest;
use crate::GenerateError;
use nupak_remote::{resolve_latest, RegistryClient, SELF_CONTAINED_RUNTIME_PACKAGES};
use nupak_runtime::{check_runtime, restore_args, CommandRunner, RuntimeRef, FLATPAK_BIN};
use nupak_schema::{decode_content_hash, sort_and_dedup, SourceEntry};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix of the per-package digest sidecar in the restore cache layout
/// `.../{name}/{version}/{name}.{version}.nupkg.sha512`.
const SIDECAR_SUFFIX: &str = ".nupkg.sha512";

/// Run the full resolution pipeline for one request.
///
/// Preconditions are checked in order, short-circuiting on the first
/// failure, and the scratch directory never survives the call, whichever
/// way it ends. "No packages restored" is `Ok` with an empty list; every
/// failure is a typed error. Extra-package lookups are the one tolerated
/// partial failure: a package that cannot be resolved is skipped, never
/// fatal.
pub fn generate_sources(
    runner: &dyn CommandRunner,
    client: &RegistryClient,
    request: &GenerateRequest,
) -> Result<Vec<SourceEntry>, GenerateError> {
    if !is_project_file(&request.project) {
        eprintln!("[Error] Invalid input csproj file path");
        return Err(GenerateError::InvalidInput(request.project.clone()));
    }

    let sdk = RuntimeRef::sdk(&request.branch);
    if !check_runtime(runner, &sdk, request.user_mode) {
        return Err(GenerateError::MissingRuntime(sdk.to_string()));
    }
    let extension = RuntimeRef::dotnet_extension(request.dotnet_major, &request.branch);
    if !check_runtime(runner, &extension, request.user_mode) {
        return Err(GenerateError::MissingRuntime(extension.to_string()));
    }

    let scratch = request.scratch_dir();
    fs::create_dir_all(&scratch)?;
    tracing::debug!(
        "restoring {} into {}",
        request.project.display(),
        scratch.display()
    );

    let args = restore_args(
        request.dotnet_major,
        &request.branch,
        &scratch,
        &request.project,
        request.user_mode,
    );

    // Harvest before cleanup; the scratch directory is removed on every
    // path out of this block.
    let mut entries = match runner.run(FLATPAK_BIN, &args) {
        Ok(output) if output.success() => {
            let harvested = harvest_sidecars(&scratch, &request.dest_dir);
            fs::remove_dir_all(&scratch)?;
            harvested?
        }
        Ok(output) => {
            let captured = output.combined();
            eprintln!("[Error] Unable to restore project: {captured}");
            fs::remove_dir_all(&scratch)?;
            return Err(GenerateError::RestoreFailed(captured));
        }
        Err(err) => {
            fs::remove_dir_all(&scratch)?;
            return Err(err.into());
        }
    };

    if request.self_contained {
        for name in SELF_CONTAINED_RUNTIME_PACKAGES {
            entries.extend(resolve_latest(client, name, &request.dest_dir));
        }
    }
    for name in &request.extra_packages {
        entries.extend(resolve_latest(client, name, &request.dest_dir));
    }

    sort_and_dedup(&mut entries);
    let plural = if entries.len() == 1 { "" } else { "s" };
    println!("[Info] Generated {} source{plural}", entries.len());
    Ok(entries)
}

/// Scan a restore cache for `*.nupkg.sha512` sidecars and build one
/// source entry per package version found. Package name and version come
/// from the cache layout: the sidecar's grandparent and parent directory
/// names respectively.
pub fn harvest_sidecars(cache_dir: &Path, dest: &str) -> Result<Vec<SourceEntry>, GenerateError> {
    let mut sidecars = Vec::new();
    collect_sidecars(cache_dir, &mut sidecars)?;

    let mut entries = Vec::with_capacity(sidecars.len());
    for path in &sidecars {
        entries.push(entry_from_sidecar(path, dest)?);
    }
    Ok(entries)
}

fn collect_sidecars(dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), GenerateError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sidecars(&path, found)?;
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(SIDECAR_SUFFIX))
        {
            found.push(path);
        }
    }
    Ok(())
}

fn entry_from_sidecar(path: &Path, dest: &str) -> Result<SourceEntry, GenerateError> {
    let bad = |reason: String| GenerateError::InvalidSidecar {
        path: path.to_owned(),
        reason,
    };

    let mut ancestors = path.iter().rev().skip(1);
    let version = ancestors
        .next()
        .and_then(|c| c.to_str())
        .ok_or_else(|| bad("no version path component".to_owned()))?;
    let name = ancestors
        .next()
        .and_then(|c| c.to_str())
        .ok_or_else(|| bad("no package path component".to_owned()))?;

    let text = fs::read_to_string(path)?;
    let sha512 = decode_content_hash(&text).map_err(|e| bad(e.to_string()))?;

    println!("[Found] {name}");
    Ok(SourceEntry::nupkg_in(name, version, &sha512, dest))
}

/// The restore accepts csproj project manifests only.
fn is_project_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("csproj")
}
