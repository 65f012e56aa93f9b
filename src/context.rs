//! Resolved configuration plus the HTTP client, shared by the CLI and the TUI.

use std::path::Path;

use anyhow::{Result, anyhow};

use crate::catalog::CategoryPriority;
use crate::loader::ManifestLoader;
use crate::model::{CatalogConfig, VariantConfig};
use crate::remote::RemoteClient;
use crate::session::{CatalogSession, LoadOutcome};
use crate::store::ConfigStore;

/// Command-line overrides applied on top of the config file for one run.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub manifest_url: Option<String>,
    pub vector: bool,
    pub no_category_filter: bool,
}

pub struct CatalogContext {
    pub store: ConfigStore,
    pub config: CatalogConfig,
    pub client: RemoteClient,
}

impl CatalogContext {
    pub fn open(config_path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let store = ConfigStore::locate(config_path)?;
        let mut config = store.read_config()?;
        apply_overrides(&mut config, overrides);
        let client = RemoteClient::new()?;
        Ok(Self {
            store,
            config,
            client,
        })
    }

    pub fn manifest_url(&self) -> String {
        self.config.source.manifest_url()
    }

    pub fn variant(&self) -> VariantConfig {
        self.config.variant
    }

    pub fn priority(&self) -> CategoryPriority {
        CategoryPriority::new(&self.config.categories)
    }

    pub fn loader(&self) -> ManifestLoader<'_> {
        ManifestLoader::new(&self.client, self.config.variant.vector_capable)
    }

    /// Loads the catalog once; a failed load is an error for one-shot commands.
    pub fn load_session(&self) -> Result<CatalogSession> {
        let mut session = CatalogSession::new(self.priority());
        let url = self.manifest_url();
        match session.load_now(&self.loader(), &url) {
            LoadOutcome::Applied { .. } => Ok(session),
            LoadOutcome::Failed(err) => Err(anyhow!(err).context(
                "error loading assets (check your internet connection and repository URL)",
            )),
            LoadOutcome::Stale => Err(anyhow!("catalog load was superseded")),
        }
    }
}

pub fn apply_overrides(config: &mut CatalogConfig, overrides: &Overrides) {
    if let Some(url) = overrides.manifest_url.as_ref() {
        config.source.manifest_url = Some(url.clone());
    }
    if overrides.vector {
        config.variant.vector_capable = true;
    }
    if overrides.no_category_filter {
        config.variant.has_category_filter = false;
    }
}
