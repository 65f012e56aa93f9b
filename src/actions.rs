//! Action dispatcher: turns (record, action) into clipboard, browser and
//! notification calls.

use crate::error::CatalogError;
use crate::model::{AssetRecord, VariantConfig};
use crate::remote::Fetch;

mod available;
mod services;

pub use self::available::{AssetAction, available_actions};
pub use self::services::{
    Browser, Clipboard, Notice, NoticeKind, Notifier, SystemBrowser, SystemClipboard,
    ConsoleNotifier,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Preview,
    Vector,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Preview => "PNG",
            LinkKind::Vector => "SVG",
        }
    }

    fn url(self, record: &AssetRecord) -> Option<&str> {
        let url = match self {
            LinkKind::Preview => Some(record.preview_url.as_str()),
            LinkKind::Vector => record.vector_url.as_deref(),
        };
        url.filter(|u| !u.trim().is_empty())
    }
}

pub struct ActionDispatcher<'a> {
    clipboard: &'a mut dyn Clipboard,
    browser: &'a dyn Browser,
    notifier: &'a dyn Notifier,
    fetcher: &'a dyn Fetch,
    variant: VariantConfig,
}

impl<'a> ActionDispatcher<'a> {
    pub fn new(
        clipboard: &'a mut dyn Clipboard,
        browser: &'a dyn Browser,
        notifier: &'a dyn Notifier,
        fetcher: &'a dyn Fetch,
        variant: VariantConfig,
    ) -> Self {
        Self {
            clipboard,
            browser,
            notifier,
            fetcher,
            variant,
        }
    }

    pub fn run(&mut self, action: AssetAction, record: &AssetRecord) -> Result<(), CatalogError> {
        match action {
            AssetAction::CopyPreviewUrl => self.copy_link(record, LinkKind::Preview),
            AssetAction::CopyVectorUrl => self.copy_link(record, LinkKind::Vector),
            AssetAction::CopyVectorCode => self.copy_inline_content(record),
            AssetAction::OpenPreview => self.open_external(record, LinkKind::Preview),
            AssetAction::OpenVector => self.open_external(record, LinkKind::Vector),
            AssetAction::CopyId => self.copy_id(record),
        }
    }

    pub fn copy_link(
        &mut self,
        record: &AssetRecord,
        which: LinkKind,
    ) -> Result<(), CatalogError> {
        let res = match which.url(record) {
            Some(url) => self.clipboard.copy(url),
            None => Err(unavailable("copy link", record)),
        };
        let what = match which {
            LinkKind::Preview => "URL",
            LinkKind::Vector => "SVG URL",
        };
        self.report(
            res,
            "URL copied!",
            format!("{} {} is in clipboard", record.name, what),
            "Could not copy URL",
        )
    }

    /// Fetches the vector source and copies its text. Emits an in-progress
    /// notice before the fetch starts.
    pub fn copy_inline_content(&mut self, record: &AssetRecord) -> Result<(), CatalogError> {
        let res = self.fetch_and_copy(record);
        self.report(
            res,
            "SVG copied!",
            format!("{} SVG code is in clipboard", record.name),
            "Could not fetch or copy SVG content",
        )
    }

    fn fetch_and_copy(&mut self, record: &AssetRecord) -> Result<(), CatalogError> {
        if !self.variant.vector_capable {
            return Err(unavailable("copy SVG code", record));
        }
        let url = LinkKind::Vector
            .url(record)
            .ok_or_else(|| unavailable("copy SVG code", record))?;

        self.notifier.notify(Notice::new(
            NoticeKind::InProgress,
            "Fetching SVG...",
            record.name.clone(),
        ));
        let body = self.fetcher.fetch_text(url)?;
        self.clipboard.copy(&body)
    }

    pub fn open_external(
        &mut self,
        record: &AssetRecord,
        which: LinkKind,
    ) -> Result<(), CatalogError> {
        let res = match which.url(record) {
            Some(url) => self.browser.open(url),
            None => Err(unavailable("open", record)),
        };
        self.report(
            res,
            "Opened in browser",
            format!("{} {}", record.name, which.label()),
            "Could not open URL",
        )
    }

    pub fn copy_id(&mut self, record: &AssetRecord) -> Result<(), CatalogError> {
        let res = self.clipboard.copy(&record.id);
        self.report(res, "ID copied!", record.id.clone(), "Could not copy asset ID")
    }

    fn report(
        &self,
        res: Result<(), CatalogError>,
        ok_title: &str,
        ok_message: String,
        fail_message: &str,
    ) -> Result<(), CatalogError> {
        match &res {
            Ok(()) => {
                self.notifier
                    .notify(Notice::new(NoticeKind::Success, ok_title, ok_message));
            }
            Err(err) => {
                tracing::warn!(error = %err, "asset action failed");
                self.notifier.notify(Notice::new(
                    NoticeKind::Failure,
                    err.title(),
                    fail_message.to_string(),
                ));
            }
        }
        res
    }
}

fn unavailable(action: &'static str, record: &AssetRecord) -> CatalogError {
    CatalogError::Unavailable {
        action,
        id: record.id.clone(),
    }
}

#[cfg(test)]
#[path = "tests/actions_tests.rs"]
mod tests;
