use serde::{Deserialize, Serialize};

/// Registry host serving the flat-container download endpoint.
pub const NUGET_API: &str = "https://api.nuget.org";

/// Subdirectory flatpak-builder downloads every package into.
pub const DEFAULT_DEST: &str = "nuget-sources";

/// Discriminator for the consuming manifest format. Every NuGet artifact
/// is a plain file download.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceKind {
    #[default]
    #[serde(rename = "file")]
    File,
}

/// One downloadable artifact in the generated sources manifest.
///
/// Field order here is the key order consumers see in the output file.
/// `dest_filename` uniquely identifies an entry within a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceEntry {
    pub url: String,
    pub sha512: String,
    pub dest: String,
    #[serde(rename = "dest-filename")]
    pub dest_filename: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

impl SourceEntry {
    /// Build the entry for `{name}.{version}.nupkg`, pointed at the
    /// registry's flat-container URL. `sha512` is the lowercase hex digest.
    pub fn nupkg(name: &str, version: &str, sha512: &str) -> Self {
        Self::nupkg_in(name, version, sha512, DEFAULT_DEST)
    }

    /// Same entry with a caller-chosen destination subdirectory.
    pub fn nupkg_in(name: &str, version: &str, sha512: &str, dest: &str) -> Self {
        let filename = format!("{name}.{version}.nupkg");
        Self {
            url: format!("{NUGET_API}/v3-flatcontainer/{name}/{version}/{filename}"),
            sha512: sha512.to_owned(),
            dest: dest.to_owned(),
            dest_filename: filename,
            kind: SourceKind::File,
        }
    }
}

/// Ordinal sort by destination filename, collapsing duplicates.
///
/// The manifest must come out identical regardless of filesystem
/// enumeration order or registry response timing, and two entries for the
/// same package+version must collapse to one.
pub fn sort_and_dedup(entries: &mut Vec<SourceEntry>) {
    entries.sort_by(|a, b| a.dest_filename.cmp(&b.dest_filename));
    entries.dedup_by(|a, b| a.dest_filename == b.dest_filename);
}
