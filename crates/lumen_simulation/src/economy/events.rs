//! Economy events.

use bevy::prelude::*;

/// Игрок подобрал монету
#[derive(Event, Debug, Clone)]
pub struct CoinCollected {
    pub coin: Entity,
    pub collector: Entity,
    pub value: u32,
}
