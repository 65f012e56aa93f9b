use serde::{Deserialize, Serialize};

pub const DEFAULT_REPO: &str = "vadim-ux/team-graphics-library-official";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_MANIFEST_PATH: &str = "metadata.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub version: u32,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub variant: VariantConfig,

    /// Category priority list. Order here is display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<KnownCategory>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version: 1,
            source: SourceConfig::default(),
            variant: VariantConfig::default(),
            categories: default_categories(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// GitHub repository in `owner/name` form.
    pub repo: String,
    pub branch: String,

    /// Manifest path inside the repository.
    pub path: String,

    /// Explicit manifest URL; overrides `repo`/`branch`/`path` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_url: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            path: DEFAULT_MANIFEST_PATH.to_string(),
            manifest_url: None,
        }
    }
}

impl SourceConfig {
    pub fn manifest_url(&self) -> String {
        if let Some(url) = self.manifest_url.as_deref()
            && !url.trim().is_empty()
        {
            return url.trim().to_string();
        }
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            self.repo.trim_matches('/'),
            self.branch,
            self.path.trim_start_matches('/')
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    pub has_category_filter: bool,

    /// Only records with a vector form are kept, and inline SVG copy is offered.
    pub vector_capable: bool,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            has_category_filter: true,
            vector_capable: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownCategory {
    /// Canonical label, matched case-insensitively against record categories.
    pub key: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl KnownCategory {
    fn new(key: &str, title: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
        }
    }
}

fn default_categories() -> Vec<KnownCategory> {
    vec![
        KnownCategory::new(
            "diagrams",
            "Diagrams",
            "Charts, flowcharts, and data visualizations",
        ),
        KnownCategory::new("ebees", "eBees", "All versions of eBee mascot"),
        KnownCategory::new("icons", "Icons", "UI icons and symbols"),
        KnownCategory::new(
            "illustrations",
            "Illustrations",
            "Custom illustrations and artwork",
        ),
        KnownCategory::new("logos", "Logos", "Brand logos and marks"),
        KnownCategory::new(
            "stickers",
            "Stickers",
            "Fun stickers and decorative elements",
        ),
        KnownCategory::new("templates", "Templates", "Design templates and layouts"),
    ]
}
