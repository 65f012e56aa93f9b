use anyhow::Result;

use crate::tui::TuiRunOptions;

mod app;
mod input;
mod rows;
mod view;
mod worker;

pub(crate) fn run(opts: TuiRunOptions) -> Result<()> {
    app::run(opts)
}
