//! Data model for Flatpak NuGet source manifests.
//!
//! This crate defines the `SourceEntry` shape flatpak-builder consumes,
//! the base64-to-hex digest transcoding used for registry-published
//! SHA-512 hashes, and the sources file writer with output path
//! normalization.

pub mod hash;
pub mod manifest;
pub mod source;

pub use hash::{decode_content_hash, HashError};
pub use manifest::{normalize_output_path, write_sources_file, ManifestError, DEFAULT_OUTPUT};
pub use source::{sort_and_dedup, SourceEntry, SourceKind, DEFAULT_DEST, NUGET_API};
