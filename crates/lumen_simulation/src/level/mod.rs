//! Level domain: гибель игрока и выход с уровня
//!
//! TargetEliminated → LevelState.resets_requested += 1 → LevelResetRequested
//! → игрок возвращается на PlayerSpawn с чистым ControlState.
//!
//! LevelExit: игрок (со свободным управлением) входит в радиус →
//! LevelState.levels_completed += 1 → LevelCompleted. Exit срабатывает один раз.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod systems;

pub use systems::{detect_level_exit, handle_target_eliminated, reset_players, spawn_level_exit};

use crate::SimSet;

/// Счётчики уровня
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct LevelState {
    pub resets_requested: u32,
    pub levels_completed: u32,
}

/// Выход с уровня (trigger-зона вокруг Transform)
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct LevelExit {
    pub radius: f32,
    #[serde(skip)]
    pub triggered: bool,
}

impl Default for LevelExit {
    fn default() -> Self {
        Self {
            radius: 1.5,
            triggered: false,
        }
    }
}

/// Запрос на перезапуск уровня (выставляется после TargetEliminated)
#[derive(Event, Debug, Clone)]
pub struct LevelResetRequested {
    /// Враг, устранивший игрока
    pub cause: Entity,
}

/// Игрок дошёл до LevelExit
#[derive(Event, Debug, Clone)]
pub struct LevelCompleted {
    pub exit: Entity,
    pub player: Entity,
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelState>()
            .add_event::<LevelResetRequested>()
            .add_event::<LevelCompleted>()
            .add_systems(
                FixedUpdate,
                (handle_target_eliminated, reset_players, detect_level_exit)
                    .chain()
                    .in_set(SimSet::Level),
            );
    }
}
