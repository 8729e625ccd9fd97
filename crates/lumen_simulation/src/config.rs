//! SimulationConfig: все геймплейные параметры в одном JSON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::charging::ChargingStation;
use crate::economy::Coin;
use crate::enemy::EnemyConfig;
use crate::flashlight::Flashlight;
use crate::level::LevelExit;
use crate::player::PlayerController;
use crate::world::WalkableGround;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("inconsistent config: {0}")]
    Inconsistent(String),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Параметры всей симуляции (отсутствующие поля → defaults)
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    /// Частота FixedUpdate (Hz)
    pub tick_hz: f64,
    pub enemy: EnemyConfig,
    pub player: PlayerController,
    pub flashlight: Flashlight,
    pub charging_station: ChargingStation,
    pub coin: Coin,
    pub level_exit: LevelExit,
    pub ground: WalkableGround,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: 60.0,
            enemy: EnemyConfig::default(),
            player: PlayerController::default(),
            flashlight: Flashlight::default(),
            charging_station: ChargingStation::default(),
            coin: Coin::default(),
            level_exit: LevelExit::default(),
            ground: WalkableGround::default(),
        }
    }
}

impl SimulationConfig {
    /// Парсинг + validate
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        crate::log_info(&format!("Config loaded from {}", path.as_ref().display()));
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_hz > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "tick_hz",
                value: self.tick_hz as f32,
            });
        }

        self.enemy.validate()?;

        let positive = [
            ("player.walk_speed", self.player.walk_speed),
            ("player.run_speed", self.player.run_speed),
            ("flashlight.max_battery", self.flashlight.max_battery),
            ("flashlight.max_distance", self.flashlight.max_distance),
            ("charging_station.detection_radius", self.charging_station.detection_radius),
            ("coin.pickup_radius", self.coin.pickup_radius),
            ("level_exit.radius", self.level_exit.radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("player.rotation_speed", self.player.rotation_speed),
            ("flashlight.drain_rate", self.flashlight.drain_rate),
            ("flashlight.recharge_rate", self.flashlight.recharge_rate),
            ("flashlight.dazzle_rate", self.flashlight.dazzle_rate),
            ("charging_station.charge_rate", self.charging_station.charge_rate),
            ("charging_station.drain_rate", self.charging_station.drain_rate),
            ("charging_station.self_recharge_rate", self.charging_station.self_recharge_rate),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.flashlight.battery > self.flashlight.max_battery {
            return Err(ConfigError::Inconsistent(format!(
                "flashlight.battery ({}) exceeds flashlight.max_battery ({})",
                self.flashlight.battery, self.flashlight.max_battery
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SimulationConfig::from_json_str("{}").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.enemy, EnemyConfig::default());
        assert_eq!(config.coin.value, 1);
    }

    #[test]
    fn test_nested_override() {
        let json = r#"{ "seed": 7, "enemy": { "retreat_speed": 0.0 }, "flashlight": { "dazzle_rate": 50.0 } }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.enemy.retreat_speed, 0.0);
        assert_eq!(config.enemy.sight_range, 8.0);
        assert_eq!(config.flashlight.dazzle_rate, 50.0);
    }

    #[test]
    fn test_level_exit_radius_must_be_positive() {
        let json = r#"{ "level_exit": { "radius": 0.0 } }"#;
        let err = SimulationConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive {
                field: "level_exit.radius",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_enemy_config_rejected() {
        let json = r#"{ "enemy": { "catch_range": 20.0 } }"#;
        let err = SimulationConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Inconsistent(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = SimulationConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimulationConfig::load("/definitely/not/here/lumen.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = SimulationConfig {
            tick_hz: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "tick_hz", .. })
        ));
    }
}
