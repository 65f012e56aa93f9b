use graphics_catalog::model::VariantConfig;
use graphics_catalog::view::{Selection, ViewQuery, view};

use super::*;

pub(super) fn handle_info_command(ctx: &CatalogContext, json: bool) -> Result<()> {
    let session = ctx.load_session()?;
    let catalog = session.catalog();
    let info = catalog.info();
    let url = ctx.manifest_url();

    if json {
        let out = serde_json::json!({
            "name": info.name,
            "version": info.version,
            "updated": info.updated,
            "url": url,
            "assets": catalog.len(),
            "categories": catalog.category_order().len(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize info json")?
        );
        return Ok(());
    }

    println!("name: {}", info.name);
    println!("version: {}", info.version);
    println!("updated: {}", info.updated_display());
    println!("url: {}", url);
    println!("assets: {}", catalog.len());
    println!("categories: {}", catalog.category_order().len());
    Ok(())
}

pub(super) fn handle_categories_command(ctx: &CatalogContext, json: bool) -> Result<()> {
    let session = ctx.load_session()?;
    let catalog = session.catalog();
    // Category choices are listed even when selection is disabled for browsing.
    let variant = VariantConfig {
        has_category_filter: true,
        ..ctx.variant()
    };
    let v = view(&catalog, session.priority(), variant, &ViewQuery::default());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&v.choices).context("serialize categories json")?
        );
        return Ok(());
    }

    let width = v.choices.iter().map(|c| c.value.len()).max().unwrap_or(0);
    for choice in &v.choices {
        println!("{:<width$}  {}", choice.value, choice.label(), width = width);
    }
    Ok(())
}

pub(super) fn handle_list_command(
    ctx: &CatalogContext,
    category: &str,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let session = ctx.load_session()?;
    let catalog = session.catalog();
    let variant = ctx.variant();
    let query = ViewQuery {
        selection: Selection::parse(category),
        search: search.map(str::to_string),
    };
    let v = view(&catalog, session.priority(), variant, &query);

    if json {
        let sections = v
            .sections
            .iter()
            .map(|s| {
                serde_json::json!({
                    "category": s.key.as_str(),
                    "title": s.title,
                    "assets": s.records,
                })
            })
            .collect::<Vec<_>>();
        println!(
            "{}",
            serde_json::to_string_pretty(&sections).context("serialize list json")?
        );
        return Ok(());
    }

    if v.sections.is_empty() {
        eprintln!("No assets found");
        return Ok(());
    }

    for (i, section) in v.sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({})", section.title, section.records.len());
        let width = section.records.iter().map(|r| r.id.len()).max().unwrap_or(0);
        for record in &section.records {
            let subtitle = record.subtitle(variant.vector_capable);
            if subtitle.is_empty() {
                println!("  {:<width$}  {}", record.id, record.name, width = width);
            } else {
                println!(
                    "  {:<width$}  {}  {}",
                    record.id,
                    record.name,
                    subtitle,
                    width = width
                );
            }
        }
    }
    Ok(())
}

pub(super) fn handle_show_command(ctx: &CatalogContext, asset_id: &str, json: bool) -> Result<()> {
    let session = ctx.load_session()?;
    let catalog = session.catalog();
    let record = catalog
        .find(asset_id)
        .with_context(|| format!("asset not found: {}", asset_id))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(record).context("serialize asset json")?
        );
        return Ok(());
    }

    let key = record.category_key();
    println!("id: {}", record.id);
    println!("name: {}", record.name);
    println!(
        "category: {}",
        session.priority().display_name(&key, &record.category)
    );
    if !record.tags.is_empty() {
        println!("tags: {}", record.tags.join(", "));
    }
    println!("url: {}", record.preview_url);
    if let Some(svg) = record.vector_url.as_deref() {
        println!("svg_url: {}", svg);
    }
    if let Some(size) = record.size_label.as_deref() {
        println!("size: {}", size);
    }
    if let Some(filename) = record.filename.as_deref() {
        println!("filename: {}", filename);
    }
    Ok(())
}
