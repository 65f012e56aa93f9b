use std::path::PathBuf;

use anyhow::Result;

use crate::context::Overrides;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
}

pub fn run() -> Result<()> {
    crate::tui_shell::run(TuiRunOptions::default())
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
