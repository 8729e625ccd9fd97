//! Enemy spawn helper.

use bevy::prelude::*;

use crate::enemy::{BeamHitbox, Dissolve, EnemyConfig, EnemyController, EnemyMotor};

/// Спавнит врага со всеми компонентами (Patrolling, полная resistance)
pub fn spawn_enemy(world: &mut World, position: Vec3, config: EnemyConfig) -> Entity {
    world
        .spawn((
            Transform::from_translation(position),
            EnemyController::new(config),
            EnemyMotor::default(),
            Dissolve::default(),
            BeamHitbox::default(),
        ))
        .id()
}
