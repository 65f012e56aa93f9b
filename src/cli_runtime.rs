use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use graphics_catalog::context::Overrides;
use graphics_catalog::logging::{LogTarget, init_tracing};

use crate::Commands;

#[derive(Parser)]
#[command(name = "graphics-catalog")]
#[command(about = "Browse the team graphics library", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) globals: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone, Debug)]
pub(crate) struct GlobalArgs {
    /// Config file (defaults to $GRAPHICS_CATALOG_CONFIG, then the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Manifest URL to load instead of the configured repository
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) manifest_url: Option<String>,

    /// SVG variant: only assets with a vector form, inline SVG copy enabled
    #[arg(long, global = true)]
    pub(crate) svg: bool,

    /// Ignore category selection and show every category
    #[arg(long, global = true)]
    pub(crate) no_category_filter: bool,

    /// Write logs here (the TUI logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,
}

impl GlobalArgs {
    pub(crate) fn overrides(&self) -> Overrides {
        Overrides {
            manifest_url: self.manifest_url.clone(),
            vector: self.svg,
            no_category_filter: self.no_category_filter,
        }
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let target = match cli.globals.log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            init_tracing(target)?;
            graphics_catalog::tui::run_with_options(graphics_catalog::tui::TuiRunOptions {
                config: cli.globals.config.clone(),
                overrides: cli.globals.overrides(),
            })?;
        }
        Some(command) => {
            let target = match cli.globals.log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Stderr,
            };
            init_tracing(target)?;
            crate::cli_exec::handle_command(&cli.globals, command)?
        }
    }

    Ok(())
}
