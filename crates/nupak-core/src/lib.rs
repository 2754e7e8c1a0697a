//! Generate pipeline for Nupak.
//!
//! Validates the dotnet/branch target, runs `dotnet restore` inside the
//! Flatpak sandbox against a transient package cache, harvests the
//! cache's hash sidecars into source entries, augments with
//! registry-resolved extra packages, and finalizes a deterministic,
//! sorted list.

pub mod engine;
pub mod request;
pub mod validate;

pub use engine::{generate_sources, harvest_sidecars};
pub use request::GenerateRequest;
pub use validate::{
    validate_target, ValidateError, DEFAULT_BRANCH, DEFAULT_DOTNET, SUPPORTED_DOTNET,
};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid input csproj file path: {}", .0.display())]
    InvalidInput(PathBuf),
    #[error("required runtime is not installed: {0}")]
    MissingRuntime(String),
    #[error("dotnet restore failed: {0}")]
    RestoreFailed(String),
    #[error("invalid hash sidecar {}: {reason}", .path.display())]
    InvalidSidecar { path: PathBuf, reason: String },
    #[error("generate I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Runtime(#[from] nupak_runtime::RuntimeError),
}
