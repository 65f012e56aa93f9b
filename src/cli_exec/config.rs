use graphics_catalog::context::apply_overrides;
use graphics_catalog::store::ConfigStore;

use super::*;

pub(super) fn handle_config_command(globals: &GlobalArgs, command: ConfigCommands) -> Result<()> {
    let store = ConfigStore::locate(globals.config.as_deref())?;
    match command {
        ConfigCommands::Show { json } => {
            let mut cfg = store.read_config()?;
            apply_overrides(&mut cfg, &globals.overrides());
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
            } else {
                println!("file: {}", store.path().display());
                println!("repo: {}", cfg.source.repo);
                println!("branch: {}", cfg.source.branch);
                println!("path: {}", cfg.source.path);
                println!("manifest_url: {}", cfg.source.manifest_url());
                println!("svg: {}", cfg.variant.vector_capable);
                println!("category_filter: {}", cfg.variant.has_category_filter);
                let known = cfg
                    .categories
                    .iter()
                    .map(|c| c.key.as_str())
                    .collect::<Vec<_>>();
                println!("categories: {}", known.join(", "));
            }
        }
        ConfigCommands::Path => {
            println!("{}", store.path().display());
        }
        ConfigCommands::Set {
            repo,
            branch,
            path,
            url,
            clear_url,
            vector,
            category_filter,
        } => {
            let mut cfg = store.read_config()?;
            if let Some(repo) = repo {
                if !repo.contains('/') {
                    anyhow::bail!("repository must be in owner/name form (got {})", repo);
                }
                cfg.source.repo = repo;
            }
            if let Some(branch) = branch {
                cfg.source.branch = branch;
            }
            if let Some(path) = path {
                cfg.source.path = path;
            }
            if let Some(url) = url {
                cfg.source.manifest_url = Some(url);
            }
            if clear_url {
                cfg.source.manifest_url = None;
            }
            if let Some(vector) = vector {
                cfg.variant.vector_capable = vector;
            }
            if let Some(filter) = category_filter {
                cfg.variant.has_category_filter = filter;
            }
            store.write_config(&cfg)?;
            println!("Config written to {}", store.path().display());
        }
    }
    Ok(())
}
