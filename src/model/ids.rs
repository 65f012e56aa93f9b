use serde::{Deserialize, Serialize};

/// Bucket key for a category: the lowercase form of its normalized label.
///
/// `"Icons"` and `"icons"` share one key and therefore one bucket.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryKey(pub String);

impl CategoryKey {
    pub fn from_label(label: &str) -> Self {
        CategoryKey(label.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
