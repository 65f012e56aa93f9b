//! Filter/sort projection of a catalog for a category selection.

use crate::catalog::{Catalog, CategoryPriority};
use crate::model::{AssetRecord, CategoryKey, VariantConfig};

pub const ALL_VALUE: &str = "all";
pub const ALL_LABEL: &str = "All Assets";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Category(CategoryKey),
}

impl Selection {
    /// `"all"` (any case) selects everything; anything else names a category.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(ALL_VALUE) {
            Selection::All
        } else {
            Selection::Category(CategoryKey::from_label(value))
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Selection::All => ALL_VALUE,
            Selection::Category(key) => key.as_str(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewQuery {
    pub selection: Selection,

    /// Case-insensitive substring over name, id and tags.
    pub search: Option<String>,
}

impl ViewQuery {
    pub fn category(selection: Selection) -> Self {
        Self {
            selection,
            search: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub key: CategoryKey,
    pub title: String,
    pub records: Vec<&'a AssetRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Choice {
    /// Selection value (`"all"` or a bucket key).
    pub value: String,
    pub title: String,
    pub count: usize,
    pub selected: bool,
}

impl Choice {
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.count)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub sections: Vec<Section<'a>>,
    pub choices: Vec<Choice>,
}

impl CatalogView<'_> {
    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }

    /// Records in display order, flattened across sections.
    pub fn flat(&self) -> Vec<&AssetRecord> {
        self.sections
            .iter()
            .flat_map(|s| s.records.iter().copied())
            .collect()
    }
}

pub fn display_name(catalog: &Catalog, priority: &CategoryPriority, key: &CategoryKey) -> String {
    let label = catalog.label(key).unwrap_or(key.as_str());
    priority.display_name(key, label)
}

/// Projects `catalog` for `query`. Never fails: an unknown or stale category
/// yields no sections.
pub fn view<'a>(
    catalog: &'a Catalog,
    priority: &CategoryPriority,
    variant: VariantConfig,
    query: &ViewQuery,
) -> CatalogView<'a> {
    let selection = if variant.has_category_filter {
        query.selection.clone()
    } else {
        Selection::All
    };

    let choices = if variant.has_category_filter {
        category_choices(catalog, priority, &selection)
    } else {
        Vec::new()
    };

    let keys: Vec<&CategoryKey> = match &selection {
        Selection::All => catalog.category_order().iter().collect(),
        Selection::Category(key) => catalog
            .category_order()
            .iter()
            .filter(|k| *k == key)
            .collect(),
    };

    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut sections = Vec::new();
    for key in keys {
        let mut records = catalog.bucket(key);
        if let Some(needle) = needle.as_deref() {
            records.retain(|r| matches_search(r, needle));
            if records.is_empty() {
                continue;
            }
        }
        sections.push(Section {
            key: key.clone(),
            title: display_name(catalog, priority, key),
            records,
        });
    }

    CatalogView { sections, choices }
}

fn category_choices(
    catalog: &Catalog,
    priority: &CategoryPriority,
    selection: &Selection,
) -> Vec<Choice> {
    let mut choices = Vec::with_capacity(catalog.category_order().len() + 1);
    choices.push(Choice {
        value: ALL_VALUE.to_string(),
        title: ALL_LABEL.to_string(),
        count: catalog.len(),
        selected: *selection == Selection::All,
    });
    for key in catalog.category_order() {
        choices.push(Choice {
            value: key.as_str().to_string(),
            title: display_name(catalog, priority, key),
            count: catalog.count(key),
            selected: matches!(selection, Selection::Category(k) if k == key),
        });
    }
    choices
}

fn matches_search(record: &AssetRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.id.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
