//! Параметры врага (геймплейные константы).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Параметры EnemyController
///
/// Все длительности: секунды, дистанции: метры.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct EnemyConfig {
    /// Радиус обнаружения цели
    pub sight_range: f32,
    /// Радиус захвата
    pub catch_range: f32,
    /// Задержка от захвата до сигнала "target eliminated"
    pub kill_delay: f32,
    /// Задержка от захвата до возврата в Patrolling (независимый таймер)
    pub catch_cooldown: f32,
    /// Радиус сэмплинга patrol точек
    pub walk_point_range: f32,
    /// Дистанция "точка достигнута"
    pub walk_point_reach_distance: f32,
    /// Пауза на достигнутой patrol точке
    pub idle_time: f32,
    /// Сколько гнаться к последней известной позиции после потери цели
    pub lose_sight_delay: f32,
    /// Запас устойчивости к свету
    pub max_resistance: f32,
    /// Длительность retreat после последнего попадания света
    pub dazzle_decay_delay: f32,
    /// Скорость отступления (m/s)
    pub retreat_speed: f32,
    /// Длительность dissolve перед удалением
    pub dissolve_time: f32,
    /// Скорость экспоненциального поворота к цели (1/s)
    pub turn_rate: f32,
    /// Точка крепления схваченной цели (local space врага)
    pub attach_offset: Vec3,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            sight_range: 8.0,
            catch_range: 1.5,
            kill_delay: 2.0,
            catch_cooldown: 3.0,
            walk_point_range: 10.0,
            walk_point_reach_distance: 1.0,
            idle_time: 2.0,
            lose_sight_delay: 3.0,
            max_resistance: 100.0,
            dazzle_decay_delay: 1.5,
            retreat_speed: 4.0,
            dissolve_time: 1.5,
            turn_rate: 10.0,
            attach_offset: Vec3::new(0.0, 1.0, -0.5),
        }
    }
}

impl EnemyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("enemy.sight_range", self.sight_range),
            ("enemy.catch_range", self.catch_range),
            ("enemy.kill_delay", self.kill_delay),
            ("enemy.catch_cooldown", self.catch_cooldown),
            ("enemy.walk_point_range", self.walk_point_range),
            ("enemy.walk_point_reach_distance", self.walk_point_reach_distance),
            ("enemy.max_resistance", self.max_resistance),
            ("enemy.dazzle_decay_delay", self.dazzle_decay_delay),
            ("enemy.dissolve_time", self.dissolve_time),
            ("enemy.turn_rate", self.turn_rate),
        ];

        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        // idle/lose-sight/retreat speed могут быть нулём (мгновенно / стоим)
        let non_negative = [
            ("enemy.idle_time", self.idle_time),
            ("enemy.lose_sight_delay", self.lose_sight_delay),
            ("enemy.retreat_speed", self.retreat_speed),
        ];

        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.catch_range > self.sight_range {
            return Err(ConfigError::Inconsistent(format!(
                "enemy.catch_range ({}) exceeds enemy.sight_range ({})",
                self.catch_range, self.sight_range
            )));
        }

        if self.kill_delay >= self.catch_cooldown {
            // Допустимо: kill сработает уже после release
            crate::log_warning(&format!(
                "enemy.kill_delay ({}) >= enemy.catch_cooldown ({}): target is released before elimination",
                self.kill_delay, self.catch_cooldown
            ));
        }

        Ok(())
    }
}
