use anyhow::{bail, Context, Result};
use brightsteps_common::config::{GeneralConfig, ScreenTimeConfig, StorageConfig, TimingConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::persistence::FileSnapshotStore;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub screen_time: ScreenTimeConfig,
}

impl AppConfig {
    /// Default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("brightsteps")
            .join("app.toml")
    }

    /// Loads `<config_dir>/brightsteps/app.toml`, writing the defaults there
    /// on first run.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_config_path())
    }

    /// Loads and validates `path`. A missing file is created with defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No app config at {:?}, writing defaults", path);
            let config = Self::default();
            config.save_to_path(path)?;
            return Ok(config);
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate().with_context(|| format!("Invalid config file: {:?}", path))?;

        debug!("Loaded app config from {:?}", path);
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
        }
        let raw = toml::to_string_pretty(self).context("Failed to serialize app config")?;
        fs::write(path, raw).with_context(|| format!("Failed to write config file: {:?}", path))?;
        debug!("Saved app config to {:?}", path);
        Ok(())
    }

    /// Directory holding the persisted snapshot
    pub fn data_dir(&self) -> PathBuf {
        match &self.general.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir().unwrap_or_else(|| PathBuf::from("/tmp")).join("brightsteps"),
        }
    }

    pub fn snapshot_store(&self) -> FileSnapshotStore {
        FileSnapshotStore::new(self.data_dir())
    }

    /// Validate the configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.storage.snapshot_key.trim().is_empty() {
            bail!("storage.snapshot_key must not be empty");
        }
        if self.timing.splash_delay_ms == 0 || self.timing.plan_generation_delay_ms == 0 {
            bail!("timing delays must be greater than zero");
        }
        if self.timing.screen_time_tick_secs == 0 {
            bail!("timing.screen_time_tick_secs must be greater than zero");
        }

        debug!("Configuration validation passed");
        Ok(())
    }
}
