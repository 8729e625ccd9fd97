//! Детерминизм: одинаковый seed → идентичные патрули

mod common;

use bevy::prelude::*;
use common::{build_app, step_n};
use lumen_simulation::enemy::spawn_enemy;
use lumen_simulation::{world_snapshot, EnemyConfig, EnemyController, SimulationConfig};

const TICK_COUNT: u32 = 600;

fn run_simulation(seed: u64) -> (Vec<String>, Vec<String>) {
    let mut app = build_app(SimulationConfig {
        seed,
        ..Default::default()
    });

    for i in 0..5 {
        let position = Vec3::new(i as f32 * 3.0 - 6.0, 0.0, 0.0);
        spawn_enemy(app.world_mut(), position, EnemyConfig::default());
    }

    step_n(&mut app, TICK_COUNT);

    let world = app.world_mut();
    (
        world_snapshot::<EnemyController>(world),
        world_snapshot::<Transform>(world),
    )
}

#[test]
fn test_determinism_same_seed() {
    let first = run_simulation(12345);
    let second = run_simulation(12345);

    assert_eq!(first, second, "same seed produced different patrols");
}

#[test]
fn test_different_seed_diverges() {
    let first = run_simulation(1);
    let second = run_simulation(2);

    assert_ne!(first.1, second.1);
}
