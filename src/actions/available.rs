use crate::model::{AssetRecord, VariantConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetAction {
    OpenPreview,
    CopyPreviewUrl,
    CopyVectorCode,
    CopyVectorUrl,
    OpenVector,
    CopyId,
}

impl AssetAction {
    pub fn title(self) -> &'static str {
        match self {
            AssetAction::OpenPreview => "Open PNG in Browser",
            AssetAction::CopyPreviewUrl => "Copy Image URL",
            AssetAction::CopyVectorCode => "Copy SVG Code",
            AssetAction::CopyVectorUrl => "Copy SVG URL",
            AssetAction::OpenVector => "Open SVG in Browser",
            AssetAction::CopyId => "Copy Asset ID",
        }
    }

    /// Single-key binding used by the terminal browser.
    pub fn key(self) -> char {
        match self {
            AssetAction::OpenPreview => 'p',
            AssetAction::CopyPreviewUrl => 'c',
            AssetAction::CopyVectorCode => 's',
            AssetAction::CopyVectorUrl => 'u',
            AssetAction::OpenVector => 'o',
            AssetAction::CopyId => 'i',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        ALL.iter().copied().find(|a| a.key() == c)
    }

    /// Whether the action blocks on a network fetch.
    pub fn is_fetching(self) -> bool {
        self == AssetAction::CopyVectorCode
    }
}

const ALL: [AssetAction; 6] = [
    AssetAction::OpenPreview,
    AssetAction::CopyPreviewUrl,
    AssetAction::CopyVectorCode,
    AssetAction::CopyVectorUrl,
    AssetAction::OpenVector,
    AssetAction::CopyId,
];

/// Actions to offer for `record`, default action first. Vector actions are
/// only offered by vector variants and only for records with a vector form.
pub fn available_actions(record: &AssetRecord, variant: VariantConfig) -> Vec<AssetAction> {
    if variant.vector_capable && record.has_vector() {
        vec![
            AssetAction::CopyVectorCode,
            AssetAction::CopyVectorUrl,
            AssetAction::OpenVector,
            AssetAction::OpenPreview,
            AssetAction::CopyId,
        ]
    } else {
        vec![
            AssetAction::OpenPreview,
            AssetAction::CopyPreviewUrl,
            AssetAction::CopyId,
        ]
    }
}
