//! Charging domain: станция, заряжающая фонарь игрока

use bevy::prelude::*;

pub mod components;
pub mod systems;


// Re-export
pub use components::{ChargingStation, StationIndicator};
pub use systems::update_charging_stations;

use crate::SimSet;

pub struct ChargingPlugin;

impl Plugin for ChargingPlugin {
    fn build(&self, app: &mut App) {
        // После Equipment: drain фонаря уже посчитан, is_recharging применится на следующем тике
        app.add_systems(
            FixedUpdate,
            update_charging_stations.in_set(SimSet::Pickups),
        );
    }
}
