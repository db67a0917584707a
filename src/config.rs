//! Simulation parameters
//!
//! Everything tunable about a run lives in `SimConfig`, loadable from JSON so
//! demo scenarios can be captured in a file instead of code.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Failure modes when reading or writing a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of asteroids spawned at creation
    pub asteroid_count: usize,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Interval between simulation ticks (milliseconds)
    pub tick_interval_ms: u64,
    /// Half-extent of the reflective bounding square
    pub world_bound: f32,
    /// Half-extent of the spawn square
    pub spawn_extent: f32,
    /// Circumscribed radius of generated asteroids
    pub asteroid_radius: f32,
    /// Spawn speed range per axis, units/second
    pub max_speed: f32,
    /// Spawn spin range, radians/second
    pub max_spin: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            asteroid_count: consts::DEFAULT_ASTEROIDS,
            seed: None,
            tick_interval_ms: consts::TICK_INTERVAL_MS,
            world_bound: consts::WORLD_BOUND,
            spawn_extent: consts::SPAWN_EXTENT,
            asteroid_radius: consts::ASTEROID_RADIUS,
            max_speed: consts::MAX_SPEED,
            max_spin: consts::MAX_SPIN,
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string; absent fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Write the config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
