use std::io::ErrorKind;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::EngineSettings;

/// Host-side configuration: grid shape, cadence, identity and store location.
/// The tick interval only paces the host's calls into the engine; the engine
/// itself counts ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval_ms: u64,
    pub grace_period_ticks: u64,
    pub player_name: String,
    pub scores_path: String,
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            tick_interval_ms: 200,
            grace_period_ticks: 10,
            player_name: "player".to_string(),
            scores_path: "snake_scores.jsonl".to_string(),
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < 4 || self.field_width > 256 {
            return Err("Field width must be between 4 and 256".to_string());
        }
        if self.field_height < 4 || self.field_height > 256 {
            return Err("Field height must be between 4 and 256".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.grace_period_ticks < 1 || self.grace_period_ticks > 600 {
            return Err("Grace period must be between 1 and 600 ticks".to_string());
        }
        if self.player_name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.scores_path.trim().is_empty() {
            return Err("Scores path must not be empty".to_string());
        }
        Ok(())
    }

    /// Reads the YAML config at `path`; a missing file yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            width: self.field_width,
            height: self.field_height,
            grace_period_ticks: self.grace_period_ticks,
            rng_seed: self.rng_seed,
            ..EngineSettings::default()
        }
    }
}
