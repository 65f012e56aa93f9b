use clap::Args;

#[derive(Args)]
pub(crate) struct AssetIdArgs {
    pub(crate) asset_id: String,
}

#[derive(Args)]
pub(crate) struct CopyArgs {
    pub(crate) asset_id: String,
    /// Copy the SVG URL instead of the PNG URL
    #[arg(long)]
    pub(crate) vector: bool,
}

#[derive(Args)]
pub(crate) struct OpenArgs {
    pub(crate) asset_id: String,
    /// Open the SVG instead of the PNG
    #[arg(long)]
    pub(crate) vector: bool,
}
