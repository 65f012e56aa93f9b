use graphics_catalog::actions::{
    ActionDispatcher, AssetAction, ConsoleNotifier, SystemBrowser, SystemClipboard,
};
use graphics_catalog::model::{AssetRecord, VariantConfig};

use super::*;

fn run_action(ctx: &CatalogContext, asset_id: &str, action: AssetAction) -> Result<()> {
    let session = ctx.load_session()?;
    let catalog = session.catalog();
    let record: AssetRecord = catalog
        .find(asset_id)
        .cloned()
        .with_context(|| format!("asset not found: {}", asset_id))?;

    // `copy-svg` names the vector form explicitly, so it does not need `--svg`.
    let variant = if action == AssetAction::CopyVectorCode {
        VariantConfig {
            vector_capable: true,
            ..ctx.variant()
        }
    } else {
        ctx.variant()
    };

    // The process exits right after the action, so the text is handed off.
    let mut clipboard = SystemClipboard::for_oneshot();
    if clipboard.hands_off() && copies_to_clipboard(action) {
        eprintln!(
            "Holding the clipboard until another application takes it (Ctrl-C to stop)"
        );
    }
    let browser = SystemBrowser;
    let notifier = ConsoleNotifier;
    let mut dispatcher =
        ActionDispatcher::new(&mut clipboard, &browser, &notifier, &ctx.client, variant);
    dispatcher
        .run(action, &record)
        .with_context(|| format!("{} ({})", action.title(), record.id))?;
    Ok(())
}

fn copies_to_clipboard(action: AssetAction) -> bool {
    !matches!(action, AssetAction::OpenPreview | AssetAction::OpenVector)
}

pub(super) fn handle_copy_command(
    ctx: &CatalogContext,
    asset_id: &str,
    vector: bool,
) -> Result<()> {
    let action = if vector {
        AssetAction::CopyVectorUrl
    } else {
        AssetAction::CopyPreviewUrl
    };
    run_action(ctx, asset_id, action)
}

pub(super) fn handle_copy_svg_command(ctx: &CatalogContext, asset_id: &str) -> Result<()> {
    run_action(ctx, asset_id, AssetAction::CopyVectorCode)
}

pub(super) fn handle_copy_id_command(ctx: &CatalogContext, asset_id: &str) -> Result<()> {
    run_action(ctx, asset_id, AssetAction::CopyId)
}

pub(super) fn handle_open_command(
    ctx: &CatalogContext,
    asset_id: &str,
    vector: bool,
) -> Result<()> {
    let action = if vector {
        AssetAction::OpenVector
    } else {
        AssetAction::OpenPreview
    };
    run_action(ctx, asset_id, action)
}
