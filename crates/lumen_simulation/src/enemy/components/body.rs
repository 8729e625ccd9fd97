//! ECS-сторона врага: motor (locomotion), dissolve, hitbox луча.

use bevy::prelude::*;

use crate::enemy::collaborators::{DissolveSink, Locomotion};

/// Headless locomotion provider
///
/// EnemyController пишет сюда intent через трейт Locomotion,
/// drive_enemy_motors двигает Transform.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct EnemyMotor {
    /// Скорость ходьбы (m/s)
    pub walk_speed: f32,
    /// Текущая цель движения (None → стоим)
    pub destination: Option<Vec3>,
    /// Скорость за последний шаг (для анимаций/телеметрии)
    pub last_speed: f32,
}

impl Default for EnemyMotor {
    fn default() -> Self {
        Self {
            walk_speed: 3.5,
            destination: None,
            last_speed: 0.0,
        }
    }
}

impl Locomotion for EnemyMotor {
    fn move_to(&mut self, point: Vec3) {
        self.destination = Some(point);
    }

    fn stop(&mut self) {
        self.destination = None;
        self.last_speed = 0.0;
    }

    fn current_speed(&self) -> f32 {
        self.last_speed
    }
}

/// Dissolve параметр для рендера (0: видим, 1: растворён)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Dissolve {
    pub amount: f32,
}

impl DissolveSink for Dissolve {
    fn set_dissolve_amount(&mut self, amount: f32) {
        self.amount = amount.clamp(0.0, 1.0);
    }
}

/// Сфера попадания луча фонаря
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct BeamHitbox {
    pub radius: f32,
}

impl Default for BeamHitbox {
    fn default() -> Self {
        Self { radius: 0.6 }
    }
}
