use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
    /// Update the config file
    Set {
        /// GitHub repository holding the manifest (owner/name)
        #[arg(long)]
        repo: Option<String>,
        /// Branch to load the manifest from
        #[arg(long)]
        branch: Option<String>,
        /// Manifest path inside the repository
        #[arg(long)]
        path: Option<String>,
        /// Explicit manifest URL (overrides repo/branch/path)
        #[arg(long, value_name = "URL", conflicts_with = "clear_url")]
        url: Option<String>,
        /// Remove a previously set manifest URL
        #[arg(long)]
        clear_url: bool,
        /// Enable or disable the SVG variant
        #[arg(long, action = clap::ArgAction::Set)]
        vector: Option<bool>,
        /// Enable or disable category selection
        #[arg(long, action = clap::ArgAction::Set)]
        category_filter: Option<bool>,
    },
}
