use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default API origin; overridable from config for mirrors and tests.
pub const DEFAULT_API_BASE: &str = "https://stackblitz.com";

/// Global configuration loaded from `~/.config/sbd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SbdConfig {
    /// Transfer deadline for the project API request, in seconds.
    pub timeout_secs: u64,
    /// Per-file byte ceiling; a single larger file fails the snapshot.
    pub max_file_size_bytes: u64,
    /// Cumulative byte ceiling across all accepted files.
    pub max_total_size_bytes: u64,
    /// API origin the project endpoint is templated onto.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for SbdConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_file_size_bytes: 8 * 1024 * 1024,
            max_total_size_bytes: 64 * 1024 * 1024,
            api_base: default_api_base(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sbd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SbdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SbdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SbdConfig = toml::from_str(&data)?;
    Ok(cfg)
}
