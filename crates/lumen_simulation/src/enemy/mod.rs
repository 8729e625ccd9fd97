//! Enemy behavior module
//!
//! EnemyController (engine-agnostic FSM) + ECS adapters.
//! Порядок выполнения в EnemyAi set:
//! 1. apply_dazzle_events: DazzleApplied → apply_dazzle
//! 2. enemy_behavior_tick: perception → tick → events/despawn
//! Движение (drive_enemy_motors): в Motion set.

use bevy::prelude::*;

pub mod collaborators;
pub mod components;
pub mod controller;
pub mod events;
pub mod systems;


// Re-export основных типов
pub use collaborators::{
    Collaborators, DissolveSink, GameStateSink, Locomotion, SpatialQuery, TargetControl,
};
pub use components::*;
pub use controller::EnemyController;
pub use events::{DazzleApplied, EnemyDied, EnemyStateChanged, TargetEliminated};
pub use systems::spawn_enemy;

use crate::SimSet;

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DazzleApplied>()
            .add_event::<TargetEliminated>()
            .add_event::<EnemyDied>()
            .add_event::<EnemyStateChanged>();

        app.add_systems(
            FixedUpdate,
            (systems::apply_dazzle_events, systems::enemy_behavior_tick)
                .chain()
                .in_set(SimSet::EnemyAi),
        );

        app.add_systems(
            FixedUpdate,
            systems::drive_enemy_motors.in_set(SimSet::Motion),
        );
    }
}
