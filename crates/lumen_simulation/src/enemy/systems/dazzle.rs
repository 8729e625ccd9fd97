//! Dazzle intake.

use bevy::prelude::*;

use crate::enemy::{DazzleApplied, EnemyController, EnemyStateChanged};

/// Система: DazzleApplied → EnemyController::apply_dazzle
///
/// Выполняется до enemy_behavior_tick: переход в Dying при resistance <= 0
/// происходит в том же тике. Переход в Retreating случается здесь, поэтому
/// EnemyStateChanged для него пишет эта система.
pub fn apply_dazzle_events(
    mut dazzle_events: EventReader<DazzleApplied>,
    mut enemies: Query<&mut EnemyController>,
    mut state_events: EventWriter<EnemyStateChanged>,
) {
    for event in dazzle_events.read() {
        // Враг мог быть удалён между cast и intake
        let Ok(mut controller) = enemies.get_mut(event.enemy) else {
            continue;
        };

        let before = controller.kind();
        controller.apply_dazzle(event.amount);
        let after = controller.kind();

        if before != after {
            state_events.write(EnemyStateChanged {
                enemy: event.enemy,
                from: before,
                to: after,
            });
        }
    }
}
