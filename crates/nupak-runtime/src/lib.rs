//! Flatpak surface for Nupak.
//!
//! This crate implements the execution layer: a narrow `CommandRunner`
//! seam with host and scripted mock implementations, runtime image
//! presence checking against `flatpak list`, restore command
//! construction, and host prerequisite checks.

pub mod flatpak;
pub mod mock;
pub mod prereq;
pub mod runner;

pub use flatpak::{check_runtime, restore_args, RuntimeRef, FLATPAK_BIN, SDK_ID};
pub use mock::MockRunner;
pub use prereq::{check_prereqs, format_missing, host_supported, MissingPrereq};
pub use runner::{CommandOutput, CommandRunner, HostRunner};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("command execution failed: {0}")]
    ExecFailed(String),
}
