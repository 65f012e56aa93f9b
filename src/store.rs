//! Reads and writes the JSON configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::CatalogConfig;

pub const CONFIG_ENV: &str = "GRAPHICS_CATALOG_CONFIG";
const CONFIG_DIR: &str = "graphics-catalog";
const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Explicit path, else `$GRAPHICS_CATALOG_CONFIG`, else the platform config dir.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Ok(Self::at(p));
        }
        if let Some(p) = std::env::var_os(CONFIG_ENV)
            && !p.is_empty()
        {
            return Ok(Self::at(PathBuf::from(p)));
        }
        let dir = dirs::config_dir().ok_or_else(|| {
            anyhow!(
                "no config directory on this platform (pass --config or set {})",
                CONFIG_ENV
            )
        })?;
        Ok(Self::at(dir.join(CONFIG_DIR).join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults.
    pub fn read_config(&self) -> Result<CatalogConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(CatalogConfig::default());
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let cfg: CatalogConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        if cfg.version != 1 {
            anyhow::bail!(
                "unsupported config version {} in {}",
                cfg.version,
                self.path.display()
            );
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &CatalogConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.path, &bytes).with_context(|| format!("write {}", self.path.display()))
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
