//! Flashlight systems.

use bevy::prelude::*;

use crate::enemy::{BeamHitbox, DazzleApplied, EnemyController};
use crate::flashlight::{beam_hit_distance, Flashlight};
use crate::player::{Player, PlayerInput};

/// Система: input + battery для фонарей игроков
pub fn update_flashlights(
    mut players: Query<(&PlayerInput, &mut Flashlight), With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (input, mut flashlight) in players.iter_mut() {
        flashlight.update(input.flashlight_held, delta);
    }
}

/// Система: луч включённого фонаря → DazzleApplied ближайшему врагу
///
/// Луч из позиции игрока вдоль его forward, первый hitbox блокирует остальные.
/// Растворяющиеся враги не блокируют луч.
pub fn cast_flashlight_beams(
    players: Query<(&Transform, &Flashlight), With<Player>>,
    enemies: Query<(Entity, &Transform, &BeamHitbox, &EnemyController), Without<Player>>,
    time: Res<Time<Fixed>>,
    mut dazzle_events: EventWriter<DazzleApplied>,
) {
    let delta = time.delta_secs();

    for (transform, flashlight) in players.iter() {
        if !flashlight.is_on() {
            continue;
        }

        let origin = transform.translation;
        let direction = transform.forward().as_vec3();

        let nearest = enemies
            .iter()
            .filter(|(_, _, _, controller)| !controller.is_dying())
            .filter_map(|(entity, enemy_transform, hitbox, _)| {
                beam_hit_distance(
                    origin,
                    direction,
                    flashlight.max_distance,
                    enemy_transform.translation,
                    hitbox.radius,
                )
                .map(|distance| (entity, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((enemy, _)) = nearest {
            dazzle_events.write(DazzleApplied {
                enemy,
                amount: flashlight.dazzle_amount(delta),
            });
        }
    }
}
