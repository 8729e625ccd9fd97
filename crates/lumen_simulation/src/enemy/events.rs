//! Enemy events
//!
//! Flashlight beam → DazzleApplied → EnemyController::apply_dazzle
//! EnemyController → TargetEliminated / EnemyDied → level, logs, host

use bevy::prelude::*;

use crate::enemy::components::EnemyStateKind;

/// Луч фонаря попал во врага (amount = dazzle_rate × delta)
///
/// Несколько событий на одного врага за тик: накапливаются.
#[derive(Event, Debug, Clone)]
pub struct DazzleApplied {
    pub enemy: Entity,
    pub amount: f32,
}

/// Kill-delay истёк: схваченная цель уничтожена
#[derive(Event, Debug, Clone)]
pub struct TargetEliminated {
    pub enemy: Entity,
    pub target: Option<Entity>,
}

/// Dissolve закончен, entity удалён
#[derive(Event, Debug, Clone)]
pub struct EnemyDied {
    pub enemy: Entity,
}

/// Смена состояния FSM (для логов, UI, тестов)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyStateChanged {
    pub enemy: Entity,
    pub from: EnemyStateKind,
    pub to: EnemyStateKind,
}
