use crate::source::SourceEntry;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Output file used when the caller gives no path.
pub const DEFAULT_OUTPUT: &str = "nuget-sources.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to write sources file: {0}")]
    Io(#[from] std::io::Error),
    #[error("sources serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Normalize the user-supplied output path: `~/` expands against `$HOME`,
/// an empty or absent path falls back to the default filename, and a path
/// without an extension gets `.json` appended.
pub fn normalize_output_path(output: Option<&str>) -> PathBuf {
    let raw = output.unwrap_or_default().trim();
    if raw.is_empty() {
        return PathBuf::from(DEFAULT_OUTPUT);
    }
    let expanded = expand_home(raw);
    if expanded.extension().is_none() {
        let mut with_ext = expanded.into_os_string();
        with_ext.push(".json");
        PathBuf::from(with_ext)
    } else {
        expanded
    }
}

/// Serialize the entries as an indented JSON array and overwrite the
/// output file. Returns the absolute path of the written file.
pub fn write_sources_file(
    entries: &[SourceEntry],
    output: Option<&str>,
) -> Result<PathBuf, ManifestError> {
    let path = normalize_output_path(output);
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(&path, json)?;
    Ok(fs::canonicalize(&path)?)
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}
