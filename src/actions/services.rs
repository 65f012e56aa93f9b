//! Host services the dispatcher drives, and their system implementations.

use crate::error::CatalogError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    InProgress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} {}", self.title, self.message)
        }
    }
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), CatalogError>;
}

pub trait Browser {
    fn open(&self, url: &str) -> Result<(), CatalogError>;
}

/// Purely informational; nothing is returned to the caller.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// System clipboard, opened on first use.
///
/// On X11 and Wayland the copied text is served only while some handle is
/// alive, so long-running hosts should keep one instance for their whole
/// lifetime. Short-lived processes use [`SystemClipboard::for_oneshot`].
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hand_off: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For processes that exit right after copying: on Linux each copy blocks
    /// until another application (usually a clipboard manager) owns the text.
    pub fn for_oneshot() -> Self {
        Self {
            inner: None,
            hand_off: true,
        }
    }

    /// Whether a copy may block waiting for another application.
    pub fn hands_off(&self) -> bool {
        self.hand_off && HANDOFF_PLATFORM
    }

    /// Opens the platform clipboard now instead of on first copy.
    pub fn ensure_open(&mut self) -> Result<(), CatalogError> {
        self.handle().map(|_| ())
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, CatalogError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new().map_err(|err| CatalogError::Copy {
                reason: err.to_string(),
            })?;
            self.inner = Some(cb);
        }
        self.inner.as_mut().ok_or_else(|| CatalogError::Copy {
            reason: "clipboard unavailable".to_string(),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CatalogError> {
        let hand_off = self.hand_off;
        let cb = self.handle()?;
        let res = if hand_off {
            set_and_wait(cb, text)
        } else {
            cb.set_text(text.to_string())
        };
        res.map_err(|err| CatalogError::Copy {
            reason: err.to_string(),
        })
    }
}

const HANDOFF_PLATFORM: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_and_wait(cb: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    tracing::debug!("waiting for clipboard hand-off");
    cb.set().wait().text(text.to_string())
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_and_wait(cb: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    cb.set_text(text.to_string())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), CatalogError> {
        webbrowser::open(url).map_err(|err| CatalogError::Open {
            reason: format!("{} ({})", err, url),
        })
    }
}

/// Prints notices to stderr for CLI use.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(kind = ?notice.kind, title = %notice.title, "{}", notice.message);
        eprintln!("{}", notice);
    }
}

#[cfg(test)]
#[path = "../tests/actions/services_tests.rs"]
mod tests;
