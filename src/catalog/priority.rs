use std::cmp::Ordering;

use crate::model::{CategoryKey, KnownCategory};

/// Ordered list of canonical category labels and their curated titles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryPriority {
    known: Vec<KnownCategory>,
}

impl CategoryPriority {
    pub fn new(known: &[KnownCategory]) -> Self {
        Self {
            known: known.to_vec(),
        }
    }

    pub fn position(&self, key: &CategoryKey) -> Option<usize> {
        self.known
            .iter()
            .position(|k| k.key.to_lowercase() == key.as_str())
    }

    /// Known categories by list position, known before unknown, unknown by key.
    pub fn compare(&self, a: &CategoryKey, b: &CategoryKey) -> Ordering {
        match (self.position(a), self.position(b)) {
            (Some(ia), Some(ib)) => ia.cmp(&ib).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    /// Curated title for a known category, otherwise `label` with its first
    /// character upper-cased.
    pub fn display_name(&self, key: &CategoryKey, label: &str) -> String {
        if let Some(i) = self.position(key) {
            return self.known[i].title.clone();
        }
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
