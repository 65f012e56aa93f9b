use super::asset::{
    handle_copy_command, handle_copy_id_command, handle_copy_svg_command, handle_open_command,
};
use super::browse::{
    handle_categories_command, handle_info_command, handle_list_command, handle_show_command,
};
use super::config::handle_config_command;
use super::session::with_context;
use super::*;

pub(super) fn handle_command(globals: &GlobalArgs, command: Commands) -> Result<()> {
    match command {
        Commands::Info(args) => with_context(globals, |ctx| handle_info_command(ctx, args.json))?,
        Commands::Categories(args) => {
            with_context(globals, |ctx| handle_categories_command(ctx, args.json))?
        }
        Commands::List(args) => with_context(globals, |ctx| {
            handle_list_command(ctx, &args.category, args.search.as_deref(), args.json)
        })?,
        Commands::Show(args) => {
            with_context(globals, |ctx| handle_show_command(ctx, &args.asset_id, args.json))?
        }
        Commands::Copy(args) => {
            with_context(globals, |ctx| handle_copy_command(ctx, &args.asset_id, args.vector))?
        }
        Commands::CopySvg(args) => {
            with_context(globals, |ctx| handle_copy_svg_command(ctx, &args.asset_id))?
        }
        Commands::CopyId(args) => {
            with_context(globals, |ctx| handle_copy_id_command(ctx, &args.asset_id))?
        }
        Commands::Open(args) => {
            with_context(globals, |ctx| handle_open_command(ctx, &args.asset_id, args.vector))?
        }
        Commands::Config { command } => handle_config_command(globals, command)?,
    }

    Ok(())
}
