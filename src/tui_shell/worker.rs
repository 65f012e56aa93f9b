//! Background jobs. Results come back to the event loop over a channel.

use std::sync::mpsc::Sender;
use std::thread;

use crate::actions::{
    ActionDispatcher, AssetAction, Notice, Notifier, SystemBrowser, SystemClipboard,
};
use crate::error::CatalogError;
use crate::loader::{LoadedManifest, ManifestLoader};
use crate::model::{AssetRecord, VariantConfig};
use crate::remote::RemoteClient;
use crate::session::LoadTicket;

pub(super) enum AppEvent {
    Loaded {
        ticket: LoadTicket,
        result: Result<LoadedManifest, CatalogError>,
    },
    Notice(Notice),
    ActionFinished,
}

/// Forwards notices to the event loop.
pub(super) struct ChannelNotifier {
    tx: Sender<AppEvent>,
}

impl ChannelNotifier {
    pub(super) fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        let _ = self.tx.send(AppEvent::Notice(notice));
    }
}

pub(super) fn spawn_load(
    client: RemoteClient,
    url: String,
    vector_capable: bool,
    ticket: LoadTicket,
    tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let loader = ManifestLoader::new(&client, vector_capable);
        let result = loader.load(&url);
        let _ = tx.send(AppEvent::Loaded { ticket, result });
    });
}

/// Runs `action` against the record captured at invocation time.
pub(super) fn spawn_action(
    client: RemoteClient,
    variant: VariantConfig,
    action: AssetAction,
    record: AssetRecord,
    tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let mut clipboard = SystemClipboard::new();
        let browser = SystemBrowser;
        let notifier = ChannelNotifier::new(tx.clone());
        let mut dispatcher =
            ActionDispatcher::new(&mut clipboard, &browser, &notifier, &client, variant);
        let _ = dispatcher.run(action, &record);
        let _ = tx.send(AppEvent::ActionFinished);
    });
}
