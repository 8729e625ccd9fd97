//! LUMEN Simulation Core
//!
//! Headless ECS-симуляция на Bevy 0.16: враги, которых отгоняет и растворяет
//! свет фонаря, плюс окружение игрока (станции зарядки, монеты, reset уровня).
//!
//! Слои:
//! - enemy::EnemyController: engine-agnostic FSM, один tick() на шаг
//! - ECS systems: адаптеры (perception, locomotion, control surface)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod charging;
pub mod config;
pub mod economy;
pub mod enemy;
pub mod flashlight;
pub mod level;
pub mod logger;
pub mod player;
pub mod world;

// Re-export для удобства
pub use charging::{ChargingPlugin, ChargingStation, StationIndicator};
pub use config::{ConfigError, SimulationConfig};
pub use economy::{Coin, CoinCollected, EconomyPlugin, Wallet};
pub use enemy::{
    DazzleApplied, EnemyConfig, EnemyController, EnemyDied, EnemyPlugin, EnemyState,
    EnemyStateChanged, EnemyStateKind, LocomotionCommand, TargetEliminated,
};
pub use flashlight::{Flashlight, FlashlightPlugin};
pub use level::{LevelCompleted, LevelExit, LevelPlugin, LevelResetRequested, LevelState};
pub use logger::*;
pub use player::{ControlState, Player, PlayerController, PlayerInput, PlayerPlugin};
pub use world::WalkableGround;

/// Порядок simulation step внутри FixedUpdate
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Input → движение игрока
    PlayerInput,
    /// Батарея фонаря
    Equipment,
    /// Луч фонаря → DazzleApplied
    Beam,
    /// Dazzle intake + EnemyController::tick
    EnemyAi,
    /// Motors + attachment follow
    Motion,
    /// Монеты, станции зарядки
    Pickups,
    /// Reset уровня после гибели игрока, выход с уровня
    Level,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Параметры берёт из SimulationConfig resource (если вставлен до plugin'а),
/// иначе defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(Time::<Fixed>::from_hz(config.tick_hz));

        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(config.seed));
        }
        if !app.world().contains_resource::<WalkableGround>() {
            app.insert_resource(config.ground.clone());
        }

        app.configure_sets(
            FixedUpdate,
            (
                SimSet::PlayerInput,
                SimSet::Equipment,
                SimSet::Beam,
                SimSet::EnemyAi,
                SimSet::Motion,
                SimSet::Pickups,
                SimSet::Level,
            )
                .chain(),
        );

        app.add_plugins((
            PlayerPlugin,
            FlashlightPlugin,
            EnemyPlugin,
            ChargingPlugin,
            EconomyPlugin,
            LevelPlugin,
        ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Minimal Bevy App для headless симуляции
///
/// Каждый app.update() продвигает время ровно на один fixed step (60Hz).
/// SimulationPlugin добавляет вызывающий.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )));

    app
}

/// Snapshot компонентов T для сравнения детерминизма (по Entity index)
pub fn world_snapshot<T: Component + std::fmt::Debug>(world: &mut World) -> Vec<String> {
    let mut query = world.query::<(Entity, &T)>();
    let mut rows: Vec<(u32, String)> = query
        .iter(world)
        .map(|(entity, component)| (entity.index(), format!("{:?}", component)))
        .collect();

    rows.sort_by_key(|(index, _)| *index);
    rows.into_iter()
        .map(|(index, component)| format!("{}: {}", index, component))
        .collect()
}
