//! Внешние collaborators EnemyController
//!
//! Controller не знает про ECS/engine: physics queries, locomotion, контроль
//! цели, game state и рендер приходят через эти трейты. Headless реализации
//! живут в enemy::systems, тестовые: в controller_tests.

use bevy::prelude::*;
use rand::RngCore;

/// Spatial queries (sphere overlap + ground probe)
pub trait SpatialQuery {
    /// Есть ли отслеживаемая цель внутри сферы (center, radius)
    fn is_within_radius(&self, center: Vec3, radius: f32) -> bool;

    /// Есть ли земля под точкой (валидация patrol точки)
    fn probe_ground_below(&self, point: Vec3) -> bool;
}

/// Locomotion provider (NavMesh agent / headless motor)
pub trait Locomotion {
    fn move_to(&mut self, point: Vec3);
    fn stop(&mut self);
    /// Текущая скорость (magnitude velocity)
    fn current_speed(&self) -> f32;
}

/// Control surface схваченной цели
pub trait TargetControl {
    fn disable_control(&mut self);
    fn enable_control(&mut self);
    /// Обнулить velocity и заморозить (kinematic)
    fn freeze_physics(&mut self);
    /// Прикрепить к врагу (offset в local space врага)
    fn attach_to(&mut self, local_offset: Vec3);
    fn detach(&mut self);
}

/// Game state (reset/respawn policy: снаружи)
pub trait GameStateSink {
    fn on_target_eliminated(&mut self);
}

/// Rendering (dissolve shader / alpha fade)
pub trait DissolveSink {
    /// t ∈ [0, 1]: 0: полностью видим, 1: растворён
    fn set_dissolve_amount(&mut self, amount: f32);
}

/// Набор collaborators на один тик
pub struct Collaborators<'a> {
    pub spatial: &'a dyn SpatialQuery,
    pub locomotion: &'a mut dyn Locomotion,
    /// None → цели нет (catch только меняет состояние врага)
    pub target: Option<&'a mut dyn TargetControl>,
    pub game_state: &'a mut dyn GameStateSink,
    pub renderer: &'a mut dyn DissolveSink,
    pub rng: &'a mut dyn RngCore,
}
