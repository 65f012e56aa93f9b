//! Catalog indexer: counts, category order and per-category buckets.

use std::collections::HashMap;

use crate::loader::LoadedManifest;
use crate::model::{AssetRecord, CategoryKey, ManifestInfo};

mod priority;
pub use self::priority::CategoryPriority;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Bucket {
    /// First-seen spelling of the category.
    label: String,
    /// Indices into `Catalog::records`, in source order.
    members: Vec<usize>,
}

/// Immutable snapshot of one successful load plus its derived indexes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    info: ManifestInfo,
    records: Vec<AssetRecord>,
    order: Vec<CategoryKey>,
    buckets: HashMap<CategoryKey, Bucket>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_loaded(loaded: LoadedManifest, priority: &CategoryPriority) -> Self {
        let mut catalog = index(loaded.records, priority);
        catalog.info = loaded.info;
        catalog
    }

    pub fn info(&self) -> &ManifestInfo {
        &self.info
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn category_order(&self) -> &[CategoryKey] {
        &self.order
    }

    pub fn count(&self, key: &CategoryKey) -> usize {
        self.buckets.get(key).map(|b| b.members.len()).unwrap_or(0)
    }

    pub fn category_counts(&self) -> HashMap<CategoryKey, usize> {
        self.buckets
            .iter()
            .map(|(k, b)| (k.clone(), b.members.len()))
            .collect()
    }

    pub fn label(&self, key: &CategoryKey) -> Option<&str> {
        self.buckets.get(key).map(|b| b.label.as_str())
    }

    /// Records of one category in source order; empty for unknown keys.
    pub fn bucket(&self, key: &CategoryKey) -> Vec<&AssetRecord> {
        self.buckets
            .get(key)
            .map(|b| b.members.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    pub fn find(&self, id: &str) -> Option<&AssetRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Builds a catalog from records in source order. Pure: identical input
/// yields an identical catalog.
pub fn index(records: Vec<AssetRecord>, priority: &CategoryPriority) -> Catalog {
    let mut buckets: HashMap<CategoryKey, Bucket> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        buckets
            .entry(record.category_key())
            .or_insert_with(|| Bucket {
                label: record.category.clone(),
                members: Vec::new(),
            })
            .members
            .push(i);
    }

    let mut order: Vec<CategoryKey> = buckets.keys().cloned().collect();
    order.sort_by(|a, b| priority.compare(a, b));

    tracing::debug!(
        records = records.len(),
        categories = order.len(),
        "catalog indexed"
    );

    Catalog {
        info: ManifestInfo::default(),
        records,
        order,
        buckets,
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
