//! Economy domain: кошелёк игрока и монеты

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export
pub use components::{Coin, Wallet};
pub use events::CoinCollected;
pub use systems::{collect_coins, spawn_coin};

use crate::SimSet;

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CoinCollected>();
        app.add_systems(FixedUpdate, collect_coins.in_set(SimSet::Pickups));
    }
}
