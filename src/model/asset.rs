use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use super::CategoryKey;

/// Category assigned to records whose manifest entry has no (or an empty) category.
pub const OTHER_CATEGORY: &str = "Other";

/// One catalog entry, with its category already normalized.
///
/// Field names on the wire follow the manifest (`url`, `svgUrl`, `size`), so a
/// record serializes back into the shape it was read from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(rename = "url")]
    pub preview_url: String,

    #[serde(rename = "svgUrl", default, skip_serializing_if = "Option::is_none")]
    pub vector_url: Option<String>,

    #[serde(rename = "size", default, skip_serializing_if = "Option::is_none")]
    pub size_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl AssetRecord {
    pub fn category_key(&self) -> CategoryKey {
        CategoryKey::from_label(&self.category)
    }

    pub fn has_vector(&self) -> bool {
        self.vector_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Subtitle shown under the name in list hosts.
    pub fn subtitle(&self, vector_capable: bool) -> &str {
        match self.size_label.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ if vector_capable => "SVG",
            _ => "",
        }
    }
}

pub fn normalize_category(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => OTHER_CATEGORY.to_string(),
    }
}

/// Top-level metadata of the manifest a catalog was loaded from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub name: String,
    pub version: String,
    pub updated: String,
}

impl ManifestInfo {
    /// `updated` as `YYYY-MM-DD HH:MMZ` when it is RFC 3339, raw otherwise.
    pub fn updated_display(&self) -> String {
        fmt_ts_abs(&self.updated).unwrap_or_else(|| self.updated.clone())
    }
}

fn ts_ui_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z",
        )
        .unwrap_or_default()
    })
}

fn fmt_ts_abs(ts: &str) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    dt.to_offset(time::UtcOffset::UTC).format(ts_ui_format()).ok()
}
