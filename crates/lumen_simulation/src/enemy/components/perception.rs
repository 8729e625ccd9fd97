//! Perception snapshot и facing math.

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::enemy::collaborators::SpatialQuery;
use crate::enemy::components::EnemyConfig;

/// Входы одного тика (per-tick contract)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Perception {
    /// Позиция врага
    pub origin: Vec3,
    /// Позиция цели (None → цели нет / невалидна)
    pub target_position: Option<Vec3>,
    pub target_in_sight: bool,
    pub target_in_catch_range: bool,
}

impl Perception {
    /// Опрашивает spatial provider (sight/catch sphere checks)
    ///
    /// Без цели всё false: chase/catch/face подавлены на этот тик.
    pub fn sense(
        spatial: &dyn SpatialQuery,
        origin: Vec3,
        target_position: Option<Vec3>,
        config: &EnemyConfig,
    ) -> Self {
        let Some(target) = target_position else {
            return Self {
                origin,
                ..Default::default()
            };
        };

        Self {
            origin,
            target_position: Some(target),
            target_in_sight: spatial.is_within_radius(origin, config.sight_range),
            target_in_catch_range: spatial.is_within_radius(origin, config.catch_range),
        }
    }

    /// Цель видна и позиция известна
    pub fn visible_target(&self) -> Option<Vec3> {
        if self.target_in_sight {
            self.target_position
        } else {
            None
        }
    }
}

/// Yaw (радианы) при котором forward (-Z) смотрит вдоль `direction`
///
/// Только горизонтальная плоскость. None если direction вертикален/нулевой.
pub fn yaw_towards(direction: Vec3) -> Option<f32> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() < 1e-6 {
        return None;
    }
    Some((-flat.x).atan2(-flat.z))
}

/// Угол в диапазон (-PI, PI]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Экспоненциальное сглаживание heading к bearing (без snap)
pub fn smooth_heading(heading: f32, bearing: f32, turn_rate: f32, delta: f32) -> f32 {
    let diff = wrap_angle(bearing - heading);
    let blend = 1.0 - (-turn_rate * delta).exp();
    wrap_angle(heading + diff * blend)
}
