//! # Configuration
//!
//! Tunable constants for physics, world generation and the view, loaded from an
//! optional JSON file. Every field has a default, so a partial file (or none at all)
//! yields a playable game.
//!
//! On native targets the path is read from the `BLOCKENSPIEL_CONFIG` environment
//! variable. A file that cannot be read or parsed is reported and the defaults are
//! used instead.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "BLOCKENSPIEL_CONFIG";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub world: WorldConfig,
    pub view: ViewConfig,
}

/// Player movement and mining constants.
///
/// Speeds are in cells per second, accelerations in cells per second squared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Constant vertical acceleration, negative means downward.
    pub gravity: f32,
    /// Horizontal speed while a direction is held.
    pub speed: f32,
    /// Upward velocity given by a jump from the ground.
    pub jump_power: f32,
    /// Upward velocity held while the jetpack is active.
    pub jetpack_power: f32,
    /// Factor applied to horizontal velocity each tick with no horizontal input.
    pub idle_damping: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Minimum time between two successful mine-below actions.
    pub mine_cooldown_ms: u64,
    /// How far under the feet mine-below looks.
    pub mine_below_offset: f32,
    /// Initial state of the wall mining toggle.
    pub wall_mining_enabled: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: -25.0,
            speed: 8.0,
            jump_power: 12.0,
            jetpack_power: 15.0,
            idle_damping: 0.8,
            player_width: 0.8,
            player_height: 1.8,
            mine_cooldown_ms: 200,
            mine_below_offset: 0.1,
            wall_mining_enabled: true,
        }
    }
}

impl PhysicsConfig {
    pub fn mine_cooldown(&self) -> Duration {
        Duration::from_millis(self.mine_cooldown_ms)
    }
}

/// Which pipeline populates the main world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    /// Sine-profile ground with buildings, roads and vehicles.
    #[default]
    City,
    /// Noise-driven biome columns with caves, rivers and structures.
    Biome,
}

/// World generation and spawning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub terrain: TerrainKind,
    /// City columns are generated for x in `[-half_span, half_span)`.
    pub half_span: i32,
    /// Biome columns, caves and structures cover x and z in
    /// `[-biome_half_span, biome_half_span)`. The number of generated columns grows
    /// with the square of this value.
    pub biome_half_span: i32,
    /// Seed for structure placement. A random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Height at which the player spawns.
    pub spawn_y: f32,
    /// The spawn search tries x in `[-range, range]`.
    pub spawn_search_range: i32,
    pub spawn_search_step: i32,
    /// Text stamped in the logo world.
    pub logo_text: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            terrain: TerrainKind::City,
            half_span: 200,
            biome_half_span: 100,
            seed: None,
            spawn_y: 55.0,
            spawn_search_range: 100,
            spawn_search_step: 5,
            logo_text: String::from("BLOCKENSPIEL"),
        }
    }
}

/// Screen mapping used by the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Size of one cell in pixels.
    pub cell_size: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            cell_size: 32.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
        }
    }
}

impl GameConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path);
                config
            }
            Err(err) => {
                log::warn!("{} ({}), using defaults", err, path);
                Self::default()
            }
        }
    }
}
