use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::Format;
use crate::url_model::Endpoint;

/// Global configuration loaded from `~/.config/avtr/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvtrConfig {
    /// Base URL of the rendering service; `.<format>` is appended to it.
    pub endpoint: String,
    /// Format new builders start with (png when absent).
    #[serde(default)]
    pub default_format: Option<Format>,
}

impl Default for AvtrConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::DEFAULT.to_string(),
            default_format: None,
        }
    }
}

impl AvtrConfig {
    /// Parses and validates the configured endpoint.
    pub fn endpoint(&self) -> Result<Endpoint> {
        Endpoint::parse(&self.endpoint)
            .with_context(|| format!("bad `endpoint` in config: {}", self.endpoint))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("avtr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AvtrConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<AvtrConfig> {
    if !path.exists() {
        let default_cfg = AvtrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AvtrConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    // Fail at load time rather than on first use.
    cfg.endpoint()?;
    tracing::debug!(?cfg, "loaded config from {}", path.display());
    Ok(cfg)
}
