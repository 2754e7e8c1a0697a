use crate::client::RegistryClient;
use crate::RemoteError;
use nupak_schema::{decode_content_hash, SourceEntry};

/// Runtime packages a self-contained publish needs: the ASP.NET and base
/// runtimes for the three Linux CPU architectures.
pub const SELF_CONTAINED_RUNTIME_PACKAGES: [&str; 6] = [
    "microsoft.aspnetcore.app.runtime.linux-arm",
    "microsoft.aspnetcore.app.runtime.linux-arm64",
    "microsoft.aspnetcore.app.runtime.linux-x64",
    "microsoft.netcore.app.runtime.linux-arm",
    "microsoft.netcore.app.runtime.linux-arm64",
    "microsoft.netcore.app.runtime.linux-x64",
];

/// Resolve the latest published version of a package into a source entry
/// with the given destination subdirectory.
///
/// Walks index → last page → last package → catalog entry. The registry
/// appends chronologically, so the last leaf of the last page is the
/// latest version. A missing, empty, or malformed stage reports the
/// package and yields `None`; one failed lookup never aborts a run.
pub fn resolve_latest(client: &RegistryClient, name: &str, dest: &str) -> Option<SourceEntry> {
    let name = name.to_lowercase();
    match try_resolve(client, &name, dest) {
        Ok(entry) => {
            println!("[Found] {name}");
            Some(entry)
        }
        Err(err) => {
            tracing::debug!("lookup failed for {name}: {err}");
            eprintln!("[Error] Unable to find package: {name}");
            None
        }
    }
}

fn try_resolve(client: &RegistryClient, name: &str, dest: &str) -> Result<SourceEntry, RemoteError> {
    let index = client.index(name)?;
    let page_ref = index
        .pages
        .last()
        .ok_or_else(|| RemoteError::NotFound(format!("no catalog pages for {name}")))?;

    let page = client.page(&page_ref.url)?;
    let package = page
        .packages
        .last()
        .ok_or_else(|| RemoteError::NotFound(format!("no catalog packages for {name}")))?;

    let entry = client.entry(&package.catalog_entry.url)?;
    if entry.version.is_empty() {
        return Err(RemoteError::NotFound(format!(
            "empty catalog entry for {name}"
        )));
    }
    let sha512 = decode_content_hash(&entry.package_hash)
        .map_err(|e| RemoteError::Serialization(e.to_string()))?;
    Ok(SourceEntry::nupkg_in(name, &entry.version, &sha512, dest))
}
