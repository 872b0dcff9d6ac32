use serde::{Deserialize, Serialize};

/// Key the persisted snapshot is stored under.
pub const DEFAULT_SNAPSHOT_KEY: &str = "inclusive-learning-app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { data_dir: None, log_level: "info".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub snapshot_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string() }
    }
}

/// Delays behind the timer-driven screen transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    pub splash_delay_ms: u64,
    pub plan_generation_delay_ms: u64,
    pub screen_time_tick_secs: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { splash_delay_ms: 2500, plan_generation_delay_ms: 3000, screen_time_tick_secs: 60 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScreenTimeConfig {
    /// Subtract the per-minute ticks already credited during a game from the
    /// bulk minutes added when it finishes.
    pub deduplicate_final_minute: bool,
}
