mod asset;
mod config;
mod ids;

pub use self::asset::{AssetRecord, ManifestInfo, OTHER_CATEGORY, normalize_category};
pub use self::config::{
    CatalogConfig, DEFAULT_BRANCH, DEFAULT_MANIFEST_PATH, DEFAULT_REPO, KnownCategory,
    SourceConfig, VariantConfig,
};
pub use self::ids::CategoryKey;
