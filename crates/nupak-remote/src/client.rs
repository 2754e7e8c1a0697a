use crate::catalog::{CatalogEntry, CatalogIndex, CatalogPage};
use crate::RemoteError;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Registry host queried when none is given.
pub const DEFAULT_REGISTRY: &str = "https://api.nuget.org";

/// Thin accessor over the registry's registration catalog API.
///
/// Holds one `ureq::Agent` for its lifetime; lookups are issued
/// sequentially, one request per call, with no retries. Page and entry
/// URLs are taken verbatim from the parent structure's self-reference.
pub struct RegistryClient {
    agent: ureq::Agent,
    base_url: String,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_REGISTRY)
    }

    /// Point the client at a different registry host (test servers).
    pub fn with_base_url(url: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: url.trim_end_matches('/').to_owned(),
        }
    }

    /// The registration index for a package, listing every published
    /// version across ordered pages.
    pub fn index(&self, package: &str) -> Result<CatalogIndex, RemoteError> {
        let url = format!(
            "{}/v3/registration5-semver1/{package}/index.json",
            self.base_url
        );
        self.get_json(&url)
    }

    /// A catalog page, by the URL the index carries for it.
    pub fn page(&self, url: &str) -> Result<CatalogPage, RemoteError> {
        self.get_json(url)
    }

    /// A catalog entry, by the URL the package leaf carries for it.
    pub fn entry(&self, url: &str) -> Result<CatalogEntry, RemoteError> {
        self.get_json(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        tracing::debug!("GET {url}");
        let resp = match self.agent.get(url).call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(404)) => {
                return Err(RemoteError::NotFound(url.to_owned()));
            }
            Err(ureq::Error::StatusCode(code)) => {
                return Err(RemoteError::Http(format!("HTTP {code} for {url}")));
            }
            Err(e) => return Err(RemoteError::Http(e.to_string())),
        };

        let mut body = String::new();
        resp.into_body()
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| RemoteError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Serialization(e.to_string()))
    }
}
