//! Charging station system.

use bevy::prelude::*;

use crate::charging::ChargingStation;
use crate::economy::Wallet;
use crate::flashlight::Flashlight;
use crate::player::{Player, PlayerInput};

/// Система: зарядка фонаря игрока от станций
pub fn update_charging_stations(
    mut stations: Query<(&Transform, &mut ChargingStation)>,
    mut players: Query<
        (&Transform, &PlayerInput, &mut Flashlight, &mut Wallet),
        (With<Player>, Without<ChargingStation>),
    >,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();
    let mut player = players.single_mut().ok();

    for (station_transform, mut station) in stations.iter_mut() {
        let Some((player_transform, input, flashlight, wallet)) = player.as_mut() else {
            station.update(false, false, None, None, delta);
            continue;
        };

        let nearby = player_transform
            .translation
            .distance(station_transform.translation)
            <= station.detection_radius;

        station.update(
            nearby,
            input.interact_held,
            Some(&mut **flashlight),
            Some(&mut **wallet),
            delta,
        );
    }
}
