//! Headless locomotion: EnemyMotor → Transform.

use bevy::prelude::*;

use crate::enemy::{EnemyController, EnemyMotor};

/// Система: двигает врагов к EnemyMotor::destination
///
/// Retreat идёт с retreat_speed из config, остальное: walk_speed.
/// Поворот берётся из heading контроллера (сглаженный facing).
pub fn drive_enemy_motors(
    mut enemies: Query<(&mut Transform, &mut EnemyMotor, &EnemyController)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut motor, controller) in enemies.iter_mut() {
        transform.rotation = Quat::from_rotation_y(controller.heading());

        let Some(destination) = motor.destination else {
            motor.last_speed = 0.0;
            continue;
        };

        let speed = if controller.is_retreating() {
            controller.config().retreat_speed
        } else {
            motor.walk_speed
        };

        let to_destination = destination - transform.translation;
        let distance = to_destination.length();

        if distance < 1e-4 || delta <= 0.0 {
            motor.last_speed = 0.0;
            continue;
        }

        let step = (speed * delta).min(distance);
        transform.translation += to_destination / distance * step;
        motor.last_speed = step / delta;
    }
}
