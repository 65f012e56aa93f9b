//! Flattening of a catalog view into list rows, and selection helpers.

use crate::view::{CatalogView, Choice, Selection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum DisplayRow {
    Header { title: String, count: usize },
    /// Index into `CatalogView::flat()`.
    Asset(usize),
}

pub(super) fn build_rows(view: &CatalogView<'_>) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(view.record_count() + view.sections.len());
    let mut next = 0;
    for section in &view.sections {
        rows.push(DisplayRow::Header {
            title: section.title.clone(),
            count: section.records.len(),
        });
        for _ in &section.records {
            rows.push(DisplayRow::Asset(next));
            next += 1;
        }
    }
    rows
}

/// Row index of the `selected`-th asset, if it exists.
pub(super) fn row_of_asset(rows: &[DisplayRow], selected: usize) -> Option<usize> {
    rows.iter()
        .position(|r| matches!(r, DisplayRow::Asset(i) if *i == selected))
}

pub(super) fn clamp_selected(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selected.min(len - 1)
    }
}

/// Next (or previous) category choice after the selected one, wrapping.
/// Falls back to "all" when nothing is marked selected.
pub(super) fn cycle_selection(choices: &[Choice], forward: bool) -> Selection {
    if choices.is_empty() {
        return Selection::All;
    }
    let n = choices.len();
    let next = match choices.iter().position(|c| c.selected) {
        Some(i) if forward => (i + 1) % n,
        Some(i) => (i + n - 1) % n,
        None => 0,
    };
    Selection::parse(&choices[next].value)
}

#[cfg(test)]
#[path = "../tests/tui_shell/rows_tests.rs"]
mod tests;
