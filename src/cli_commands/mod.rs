use clap::Subcommand;

use crate::ConfigCommands;

pub(crate) mod asset;
pub(crate) mod browse;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show manifest metadata (name, version, last update)
    Info(browse::InfoArgs),

    /// List categories with asset counts, in display order
    Categories(browse::CategoriesArgs),

    /// List assets grouped by category
    List(browse::ListArgs),

    /// Show one asset
    Show(browse::ShowArgs),

    /// Copy an asset URL to the clipboard
    Copy(asset::CopyArgs),

    /// Fetch an asset's SVG source and copy it to the clipboard
    #[command(name = "copy-svg")]
    CopySvg(asset::AssetIdArgs),

    /// Copy an asset id to the clipboard
    #[command(name = "copy-id")]
    CopyId(asset::AssetIdArgs),

    /// Open an asset in the browser
    Open(asset::OpenArgs),

    /// Show or change the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
