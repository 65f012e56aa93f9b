use super::*;

pub(super) fn open_context(globals: &GlobalArgs) -> Result<CatalogContext> {
    CatalogContext::open(globals.config.as_deref(), &globals.overrides())
}

pub(super) fn with_context<F>(globals: &GlobalArgs, f: F) -> Result<()>
where
    F: FnOnce(&CatalogContext) -> Result<()>,
{
    let ctx = open_context(globals).context("resolve configuration")?;
    f(&ctx)
}
