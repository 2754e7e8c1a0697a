use serde::Deserialize;

/// Top level of a package's registration catalog: ordered references to
/// pages, oldest first. The registry only ever appends, so the newest
/// published version lives at the end of the last page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndex {
    #[serde(rename = "@id", default)]
    pub url: String,
    #[serde(default)]
    pub count: u64,
    #[serde(rename = "items", default)]
    pub pages: Vec<CatalogPage>,
}

/// One catalog page: ordered package leaves, oldest first. The index
/// carries page references by URL; fetching that URL yields the
/// populated page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    #[serde(rename = "@id", default)]
    pub url: String,
    #[serde(default)]
    pub count: u64,
    #[serde(rename = "items", default)]
    pub packages: Vec<CatalogPackage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPackage {
    #[serde(rename = "@id", default)]
    pub url: String,
    #[serde(default)]
    pub catalog_entry: CatalogEntry,
}

/// Published-version metadata: the version string and its base64-encoded
/// SHA-512 content digest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(rename = "@id", default)]
    pub url: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub package_hash: String,
    #[serde(default)]
    pub package_hash_algorithm: String,
}
