//! Failure taxonomy shared by the loader and the action dispatcher.
//!
//! Every variant is terminal for the operation that raised it; nothing here
//! is retried automatically.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Non-2xx response, or the endpoint could not be reached (`status` is `None`).
    #[error("fetch {url} failed{}", fmt_status(.status))]
    Fetch { url: String, status: Option<u16> },

    /// Malformed JSON or a document that does not look like a manifest.
    #[error("parse manifest: {reason}")]
    Parse { reason: String },

    #[error("clipboard write failed: {reason}")]
    Copy { reason: String },

    #[error("open failed: {reason}")]
    Open { reason: String },

    /// The action is not offered for this record (e.g. no vector form).
    #[error("{action} is not available for asset {id}")]
    Unavailable { action: &'static str, id: String },
}

impl CatalogError {
    pub fn fetch(url: impl Into<String>, status: Option<u16>) -> Self {
        CatalogError::Fetch {
            url: url.into(),
            status,
        }
    }

    pub fn parse(reason: impl std::fmt::Display) -> Self {
        CatalogError::Parse {
            reason: reason.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Fetch { status, .. } => *status,
            _ => None,
        }
    }

    /// Short human title, used for failure notifications.
    pub fn title(&self) -> &'static str {
        match self {
            CatalogError::Fetch { .. } => "Fetch failed",
            CatalogError::Parse { .. } => "Invalid manifest",
            CatalogError::Copy { .. } => "Copy failed",
            CatalogError::Open { .. } => "Open failed",
            CatalogError::Unavailable { .. } => "Not available",
        }
    }
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => " (unreachable)".to_string(),
    }
}
