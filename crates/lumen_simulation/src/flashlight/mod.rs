//! Flashlight domain: батарея + луч, ослепляющий врагов
//!
//! Порядок:
//! 1. update_flashlights (Equipment set): input + drain/recharge
//! 2. cast_flashlight_beams (Beam set): ray vs BeamHitbox → DazzleApplied

use bevy::prelude::*;

pub mod beam;
pub mod components;
pub mod systems;

// Re-export
pub use beam::beam_hit_distance;
pub use components::Flashlight;
pub use systems::{cast_flashlight_beams, update_flashlights};

use crate::SimSet;

pub struct FlashlightPlugin;

impl Plugin for FlashlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, update_flashlights.in_set(SimSet::Equipment));
        app.add_systems(FixedUpdate, cast_flashlight_beams.in_set(SimSet::Beam));
    }
}
