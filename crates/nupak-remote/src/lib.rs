//! NuGet registration catalog access for Nupak.
//!
//! Wire types mirroring the registry's paginated catalog, a thin
//! HTTP+JSON client holding one agent for its lifetime, and the
//! latest-version resolver used for extra packages.

pub mod catalog;
pub mod client;
pub mod resolve;

#[cfg(test)]
pub(crate) mod testutil;

pub use catalog::{CatalogEntry, CatalogIndex, CatalogPackage, CatalogPage};
pub use client::{RegistryClient, DEFAULT_REGISTRY};
pub use resolve::{resolve_latest, SELF_CONTAINED_RUNTIME_PACKAGES};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("not found: {0}")]
    NotFound(String),
}
