use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::HttpOptions;

/// Config file looked up in the working directory before the XDG location.
pub const LOCAL_CONFIG_FILE: &str = "modsync.toml";

/// Default mods directory, relative to the working directory.
pub const DEFAULT_MODS_DIR: &str = ".minecraft/mods";

/// `[general]` section of `modsync.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Mod server as `host[:port]`. Empty means no server is configured.
    pub host: String,
    /// Local mods directory.
    pub mods_dir: PathBuf,
    /// Optional connect timeout in seconds. Transfers themselves are never timed out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            mods_dir: PathBuf::from(DEFAULT_MODS_DIR),
            connect_timeout_secs: None,
        }
    }
}

/// Configuration loaded from `modsync.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModsyncConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ModsyncConfig {
    /// Configured host, trimmed; `None` when empty.
    pub fn host(&self) -> Option<&str> {
        let host = self.general.host.trim();
        (!host.is_empty()).then_some(host)
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: self.general.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// `~/.config/modsync/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("modsync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Picks the config file: `explicit` if given, else `./modsync.toml` if it
/// exists, else the XDG path.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Ok(local.to_path_buf());
    }
    config_path()
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_or_init(path: &Path) -> Result<ModsyncConfig> {
    if !path.exists() {
        let default_cfg = ModsyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: ModsyncConfig =
        toml::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(cfg)
}
