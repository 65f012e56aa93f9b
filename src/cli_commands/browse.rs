use clap::Args;

#[derive(Args)]
pub(crate) struct InfoArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CategoriesArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Category to show (`all` for every category)
    #[arg(short = 'c', long, default_value = "all")]
    pub(crate) category: String,
    /// Only assets whose name, id or tags contain this text
    #[arg(short = 's', long)]
    pub(crate) search: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    pub(crate) asset_id: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
