use anyhow::{Context, Result};

use graphics_catalog::context::CatalogContext;

use crate::cli_runtime::GlobalArgs;
use crate::{Commands, ConfigCommands};

mod asset;
mod browse;
mod config;
mod dispatch;
mod session;

pub(super) fn handle_command(globals: &GlobalArgs, command: Commands) -> Result<()> {
    dispatch::handle_command(globals, command)
}
