//! Player systems + spawn helper.

use bevy::prelude::*;

use crate::economy::Wallet;
use crate::flashlight::Flashlight;
use crate::player::{ControlState, Player, PlayerController, PlayerInput, PlayerSpawn};

/// Система: PlayerInput → поворот + движение
///
/// Поворот: turn × rotation_speed (положительный turn: вправо).
/// Движение вдоль forward (-Z) с walk/run скоростью.
pub fn apply_player_input(
    mut players: Query<(&mut Transform, &PlayerController, &PlayerInput, &mut ControlState), With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, controller, input, mut control) in players.iter_mut() {
        if !control.accepts_input() {
            control.velocity = Vec3::ZERO;
            control.running = false;
            continue;
        }

        let turn = input.turn.clamp(-1.0, 1.0);
        if turn != 0.0 {
            transform.rotate_y(-turn * controller.rotation_speed.to_radians() * delta);
        }

        let running = input.run && controller.can_run;
        let forward = transform.forward().as_vec3();
        let velocity = forward * input.forward.clamp(-1.0, 1.0) * controller.speed(running);

        transform.translation += velocity * delta;
        control.velocity = velocity;
        control.running = running;
    }
}

/// Система: прикреплённый игрок следует за holder (catch pose)
///
/// Holder мог быть удалён (враг растворился): тогда отцепляемся.
pub fn follow_attachment(
    mut players: Query<(&mut Transform, &mut ControlState), With<Player>>,
    holders: Query<&Transform, Without<Player>>,
) {
    for (mut transform, mut control) in players.iter_mut() {
        let Some(attachment) = control.attached_to else {
            continue;
        };

        let Ok(holder_transform) = holders.get(attachment.holder) else {
            crate::log_warning(&format!(
                "Player attached to missing holder {:?} → detach",
                attachment.holder
            ));
            control.attached_to = None;
            continue;
        };

        transform.translation = holder_transform.transform_point(attachment.local_offset);
        transform.rotation = holder_transform.rotation;
    }
}

/// Спавнит игрока (controller, input, control state, фонарь, кошелёк)
pub fn spawn_player(
    world: &mut World,
    transform: Transform,
    controller: PlayerController,
    flashlight: Flashlight,
) -> Entity {
    world
        .spawn((
            Player,
            transform,
            controller,
            PlayerInput::default(),
            ControlState::default(),
            PlayerSpawn { transform },
            flashlight,
            Wallet::default(),
        ))
        .id()
}
