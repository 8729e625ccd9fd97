//! Player domain: движение, control surface для catch sequence
//!
//! Содержит:
//! - Player (marker), PlayerController (скорости), PlayerInput (intent)
//! - ControlState (enabled/frozen/attached: управляется врагом при захвате)
//! - PlayerSpawn (куда возвращать при level reset)

use bevy::prelude::*;

pub mod components;
pub mod systems;

// Re-export all components and systems
pub use components::*;
pub use systems::*;

use crate::SimSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, apply_player_input.in_set(SimSet::PlayerInput));
        // После движения врагов: схваченный игрок следует за holder'ом этого тика
        app.add_systems(
            FixedUpdate,
            follow_attachment
                .in_set(SimSet::Motion)
                .after(crate::enemy::systems::drive_enemy_motors),
        );
    }
}
