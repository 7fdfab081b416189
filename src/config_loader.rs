use serde::{Deserialize, Serialize};
use std::fs::File;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Optional studio settings, loaded from sesame_studio.yaml next to the
/// manifest (or a --config override). Every key is optional; missing keys
/// fall back to the rig's usual defaults.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StudioConfig {
    /// Starting value for every angle entry field.
    pub default_angle: i32,
    /// Starting value for the delay entry field, in milliseconds.
    pub default_delay_ms: i32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_angle: 90,
            default_delay_ms: 200,
            window_width: 760.0,
            window_height: 900.0,
        }
    }
}

fn default_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sesame_studio.yaml")
}

/// Load the studio config. An explicitly requested path must exist; the
/// default path is allowed to be absent, in which case defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<StudioConfig> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_path(), false),
    };

    if !path.exists() {
        if explicit {
            return Err(anyhow!("Config file not found at {:?}", path));
        }
        log::info!(target: "config_loader", "No config at {:?}, using defaults", path);
        return Ok(StudioConfig::default());
    }

    let file = File::open(&path).map_err(|e| anyhow!("Failed to open config {:?}: {}", path, e))?;
    let config: StudioConfig =
        serde_yaml::from_reader(file).map_err(|e| anyhow!("Invalid config {:?}: {}", path, e))?;
    log::info!(
        target: "config_loader",
        "Loaded config from {:?}: default_angle={}, default_delay_ms={}",
        path,
        config.default_angle,
        config.default_delay_ms
    );
    Ok(config)
}
