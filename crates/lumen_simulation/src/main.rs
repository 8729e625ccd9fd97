//! Headless симуляция LUMEN
//!
//! Usage: lumen_simulation [config.json]
//!
//! Поднимает App без рендера, спавнит игрока с фонарём, врага, станцию,
//! монеты и выход с уровня, прогоняет фиксированное число тиков и печатает сводку.

use bevy::prelude::*;
use lumen_simulation::economy::spawn_coin;
use lumen_simulation::enemy::spawn_enemy;
use lumen_simulation::level::spawn_level_exit;
use lumen_simulation::player::spawn_player;
use lumen_simulation::{
    create_headless_app, log_error, log_info, EnemyController, LevelState, PlayerInput,
    SimulationConfig, SimulationPlugin, Wallet,
};

const TICKS: u32 = 1200;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                lumen_simulation::init_logger();
                log_error(&format!("Failed to load config {}: {}", path, err));
                std::process::exit(1);
            }
        },
        None => SimulationConfig::default(),
    };

    let mut app = create_headless_app(config.seed);
    log_info(&format!("Starting LUMEN headless simulation (seed: {})", config.seed));

    app.insert_resource(config.clone());
    app.add_plugins(SimulationPlugin);

    let world = app.world_mut();
    let player = spawn_player(
        world,
        Transform::from_xyz(0.0, 0.0, 0.0),
        config.player.clone(),
        config.flashlight.clone(),
    );
    let enemy = spawn_enemy(world, Vec3::new(0.0, 0.0, -12.0), config.enemy.clone());
    world.spawn((
        Transform::from_xyz(3.0, 0.0, 2.0),
        config.charging_station.clone(),
    ));
    for x in [-4.0, 4.0] {
        spawn_coin(world, Vec3::new(x, 0.0, -2.0), config.coin);
    }
    spawn_level_exit(world, Vec3::new(0.0, 0.0, -20.0), config.level_exit);

    // Игрок идёт вперёд с включённым фонарём
    if let Some(mut input) = world.get_mut::<PlayerInput>(player) {
        input.forward = 0.3;
        input.flashlight_held = true;
    }

    for tick in 0..TICKS {
        app.update();

        if tick % 120 == 0 {
            let world = app.world();
            let state = world
                .get::<EnemyController>(enemy)
                .map(|controller| format!("{:?}", controller.kind()))
                .unwrap_or_else(|| "removed".to_string());
            log_info(&format!("Tick {}: enemy {}", tick, state));
        }
    }

    let world = app.world();
    let coins = world.get::<Wallet>(player).map_or(0, |wallet| wallet.coins);
    let level = world.resource::<LevelState>();
    log_info(&format!(
        "Simulation complete: {} ticks, coins {}, level resets {}, levels completed {}",
        TICKS, coins, level.resets_requested, level.levels_completed
    ));
}
