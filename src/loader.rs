//! Manifest loader: one fetch, one parse, category defaulting, variant filtering.

use crate::error::CatalogError;
use crate::model::{AssetRecord, ManifestInfo};
use crate::remote::{Fetch, ManifestDocument};

/// Result of one successful load, before indexing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedManifest {
    pub info: ManifestInfo,
    pub records: Vec<AssetRecord>,
}

pub struct ManifestLoader<'a> {
    fetcher: &'a dyn Fetch,
    vector_capable: bool,
}

impl<'a> ManifestLoader<'a> {
    pub fn new(fetcher: &'a dyn Fetch, vector_capable: bool) -> Self {
        Self {
            fetcher,
            vector_capable,
        }
    }

    pub fn load(&self, url: &str) -> Result<LoadedManifest, CatalogError> {
        let bytes = self.fetcher.fetch(url)?;
        let loaded = parse_manifest(&bytes, self.vector_capable)?;
        tracing::info!(
            url,
            records = loaded.records.len(),
            version = %loaded.info.version,
            "manifest loaded"
        );
        Ok(loaded)
    }
}

/// Parses a manifest body. Either every record is accepted or the whole
/// document is rejected.
pub fn parse_manifest(
    bytes: &[u8],
    vector_capable: bool,
) -> Result<LoadedManifest, CatalogError> {
    let doc: ManifestDocument = serde_json::from_slice(bytes).map_err(CatalogError::parse)?;
    let info = doc.info();

    let total = doc.assets.len();
    let mut records: Vec<AssetRecord> = doc.assets.into_iter().map(AssetRecord::from).collect();
    if vector_capable {
        records.retain(AssetRecord::has_vector);
        if records.len() != total {
            tracing::debug!(
                dropped = total - records.len(),
                "dropped records without a vector form"
            );
        }
    }

    Ok(LoadedManifest { info, records })
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
