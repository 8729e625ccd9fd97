//! Общие helpers для integration тестов.

#![allow(dead_code)]

use bevy::prelude::*;
use lumen_simulation::{create_headless_app, SimulationConfig, SimulationPlugin};
use std::time::Duration;

pub const DT: f64 = 1.0 / 60.0;

/// Headless app с SimulationPlugin и заданным config
pub fn build_app(config: SimulationConfig) -> App {
    let mut app = create_headless_app(config.seed);
    app.insert_resource(config);
    app.add_plugins(SimulationPlugin);
    app
}

/// Один fixed step: продвигаем Time<Fixed> и гоняем FixedUpdate напрямую
pub fn step(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f64(DT));
    app.world_mut().run_schedule(FixedUpdate);
}

pub fn step_n(app: &mut App, ticks: u32) {
    for _ in 0..ticks {
        step(app);
    }
}

/// Шагаем пока condition не выполнится (Some(тик) или None по лимиту)
pub fn step_until(app: &mut App, max_ticks: u32, condition: impl Fn(&World) -> bool) -> Option<u32> {
    for tick in 1..=max_ticks {
        step(app);
        if condition(app.world()) {
            return Some(tick);
        }
    }
    None
}
