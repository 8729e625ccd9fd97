//! Coin pickup system.

use bevy::prelude::*;

use crate::economy::{Coin, CoinCollected, Wallet};
use crate::player::Player;

/// Система: монета в радиусе игрока → +value в кошелёк, despawn
///
/// Первый игрок в радиусе забирает монету, повторно она не засчитывается.
pub fn collect_coins(
    mut commands: Commands,
    mut coins: Query<(Entity, &Transform, &mut Coin), Without<Player>>,
    mut players: Query<(Entity, &Transform, &mut Wallet), With<Player>>,
    mut collected_events: EventWriter<CoinCollected>,
) {
    for (coin_entity, coin_transform, mut coin) in coins.iter_mut() {
        if coin.collected {
            continue;
        }

        for (player_entity, player_transform, mut wallet) in players.iter_mut() {
            if player_transform.translation.distance(coin_transform.translation) > coin.pickup_radius {
                continue;
            }

            coin.collected = true;
            wallet.add(coin.value);

            collected_events.write(CoinCollected {
                coin: coin_entity,
                collector: player_entity,
                value: coin.value,
            });
            commands.entity(coin_entity).despawn();
            break;
        }
    }
}

/// Spawn монеты в позиции
pub fn spawn_coin(world: &mut World, position: Vec3, coin: Coin) -> Entity {
    world
        .spawn((Transform::from_translation(position), coin))
        .id()
}
