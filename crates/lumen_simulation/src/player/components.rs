//! Player components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker component для player-controlled entity
///
/// Враги выбирают цель через `With<Player>` (single player → одна цель).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Параметры движения игрока (tank controls: поворот + вперёд/назад)
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct PlayerController {
    /// Скорость ходьбы (m/s)
    pub walk_speed: f32,
    /// Скорость бега (m/s)
    pub run_speed: f32,
    /// Скорость поворота (градусы/сек)
    pub rotation_speed: f32,
    pub can_run: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 9.0,
            rotation_speed: 120.0,
            can_run: true,
        }
    }
}

impl PlayerController {
    pub fn speed(&self, running: bool) -> f32 {
        if running && self.can_run {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}

/// Input intent на текущий тик
///
/// Для headless тестов: mock input через этот компонент.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// -1..1 (назад/вперёд)
    pub forward: f32,
    /// -1..1 (влево/вправо)
    pub turn: f32,
    pub run: bool,
    /// Фонарь включён пока держим
    pub flashlight_held: bool,
    /// Взаимодействие (зарядка у станции)
    pub interact_held: bool,
}

/// Привязка к держателю (holder entity + offset в его local space)
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Attachment {
    pub holder: Entity,
    pub local_offset: Vec3,
}

/// Состояние управления игроком
///
/// Враг при захвате: disable → freeze → attach. Пока !enabled / frozen /
/// attached: input игнорируется.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ControlState {
    pub enabled: bool,
    pub frozen: bool,
    pub velocity: Vec3,
    pub running: bool,
    pub attached_to: Option<Attachment>,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            enabled: true,
            frozen: false,
            velocity: Vec3::ZERO,
            running: false,
            attached_to: None,
        }
    }
}

impl ControlState {
    pub fn accepts_input(&self) -> bool {
        self.enabled && !self.frozen && self.attached_to.is_none()
    }
}

/// Точка респауна (level reset)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PlayerSpawn {
    pub transform: Transform,
}
