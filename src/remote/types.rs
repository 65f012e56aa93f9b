//! Wire shape of the manifest document.

use crate::model::{AssetRecord, ManifestInfo, normalize_category};

/// `metadata.json` as published. Extra top-level fields (`totalAssets`,
/// `categories`) are accepted and ignored.
#[derive(Debug, serde::Deserialize)]
pub struct ManifestDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub updated: String,

    pub assets: Vec<ManifestAsset>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestAsset {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    pub url: String,

    #[serde(default)]
    pub svg_url: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl ManifestDocument {
    pub fn info(&self) -> ManifestInfo {
        ManifestInfo {
            name: self.name.clone(),
            version: self.version.clone(),
            updated: self.updated.clone(),
        }
    }
}

impl From<ManifestAsset> for AssetRecord {
    fn from(a: ManifestAsset) -> Self {
        AssetRecord {
            id: a.id,
            name: a.name,
            category: normalize_category(a.category.as_deref()),
            tags: a.tags.unwrap_or_default(),
            preview_url: a.url,
            vector_url: a.svg_url.filter(|u| !u.trim().is_empty()),
            size_label: a.size,
            filename: a.filename,
            last_updated: a.last_updated,
        }
    }
}
