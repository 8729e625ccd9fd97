//! EnemyController: patrol/chase/catch/retreat/dying state machine
//!
//! Engine-agnostic: один вызов tick() на simulation step, все таймеры
//! хранятся явными полями EnemyState. Внешний мир приходит через Collaborators.
//!
//! Приоритет переходов (каждый тик):
//! 1. dazzle_resistance <= 0 → Dying (перекрывает всё, ровно один раз)
//! 2. Kill-delay countdown (вне Dying), не зависит от текущего состояния
//! 3. Dying / Catching: short-circuit, perception не смотрим
//! 4. target_in_catch_range → Catching
//! 5. Retreating (overlay): perception переходы заморожены до истечения
//! 6. target_in_sight → Chasing
//! 7. Chasing без цели → к last known, после lose_sight_delay → Patrolling
//! 8. Patrolling: sample → walk → idle → sample

use bevy::prelude::*;
use rand::{Rng, RngCore};

use crate::enemy::collaborators::Collaborators;
use crate::enemy::components::{
    smooth_heading, yaw_towards, EnemyConfig, EnemyState, EnemyStateKind, LocomotionCommand,
    Perception,
};

#[derive(Component, Debug, Clone)]
pub struct EnemyController {
    config: EnemyConfig,
    state: EnemyState,
    dazzle_resistance: f32,
    /// Yaw (радианы), forward = -Z
    heading: f32,
    /// Dissolve закончен: entity должен быть удалён
    removed: bool,
    /// Сколько осталось до сигнала "target eliminated" (None: захвата не было)
    ///
    /// Независим от catch_cooldown: release не отменяет kill.
    pending_kill: Option<f32>,
}

impl EnemyController {
    pub fn new(config: EnemyConfig) -> Self {
        Self {
            dazzle_resistance: config.max_resistance,
            config,
            state: EnemyState::patrolling(),
            heading: 0.0,
            removed: false,
            pending_kill: None,
        }
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn state(&self) -> &EnemyState {
        &self.state
    }

    pub fn kind(&self) -> EnemyStateKind {
        self.state.kind()
    }

    pub fn dazzle_resistance(&self) -> f32 {
        self.dazzle_resistance
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn is_dying(&self) -> bool {
        matches!(self.state, EnemyState::Dying { .. })
    }

    pub fn is_retreating(&self) -> bool {
        matches!(self.state, EnemyState::Retreating { .. })
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn pending_kill(&self) -> Option<f32> {
        self.pending_kill
    }

    /// Perception для этого врага (радиусы из config)
    pub fn perceive(
        &self,
        spatial: &dyn crate::enemy::SpatialQuery,
        origin: Vec3,
        target_position: Option<Vec3>,
    ) -> Perception {
        Perception::sense(spatial, origin, target_position, &self.config)
    }

    /// Попадание луча фонаря
    ///
    /// Можно вызывать несколько раз за тик: урон накапливается. Каждое
    /// попадание перезапускает retreat (last-writer-wins, не аддитивно).
    /// Переход в Dying при resistance <= 0 делает ближайший tick().
    pub fn apply_dazzle(&mut self, amount: f32) {
        if self.removed || self.is_dying() {
            return;
        }

        if !(amount > 0.0) {
            return;
        }

        self.dazzle_resistance -= amount;

        if self.dazzle_resistance <= 0.0 {
            return;
        }

        if let EnemyState::Retreating {
            elapsed_since_dazzle_start,
            ..
        } = &mut self.state
        {
            *elapsed_since_dazzle_start = 0.0;
            return;
        }

        // Catching: схваченная цель важнее света
        if matches!(self.state, EnemyState::Catching { .. }) {
            return;
        }

        let (last_known_target_position, time_since_last_seen) = match self.state {
            EnemyState::Chasing {
                last_known_target_position,
                time_since_last_seen,
            } => (Some(last_known_target_position), time_since_last_seen),
            _ => (None, 0.0),
        };

        crate::log(&format!(
            "AI: {:?} → Retreating (dazzled, resistance {:.1})",
            self.state.kind(),
            self.dazzle_resistance
        ));

        self.state = EnemyState::Retreating {
            elapsed_since_dazzle_start: 0.0,
            last_known_target_position,
            time_since_last_seen,
        };
    }

    /// Один simulation step
    ///
    /// Возвращает locomotion intent и сам применяет его к collab.locomotion.
    pub fn tick(
        &mut self,
        perception: &Perception,
        delta: f32,
        collab: &mut Collaborators,
    ) -> LocomotionCommand {
        if self.removed {
            return LocomotionCommand::Hold;
        }

        if self.dazzle_resistance <= 0.0 && !self.is_dying() {
            self.begin_dying(collab);
        }

        if !self.is_dying() {
            self.tick_pending_kill(delta, collab);
        }

        let command = match self.state.kind() {
            EnemyStateKind::Dying => self.tick_dying(delta, collab),
            EnemyStateKind::Catching => self.tick_catching(perception, delta, collab),
            _ => self.tick_active(perception, delta, collab),
        };

        match command {
            LocomotionCommand::MoveTo(point) => collab.locomotion.move_to(point),
            LocomotionCommand::Hold | LocomotionCommand::FaceTarget(_) => collab.locomotion.stop(),
        }

        command
    }

    fn tick_active(
        &mut self,
        perception: &Perception,
        delta: f32,
        collab: &mut Collaborators,
    ) -> LocomotionCommand {
        let origin = perception.origin;

        if perception.target_in_catch_range {
            if let Some(target) = perception.target_position {
                self.begin_catch(origin, target, delta, collab);
                return LocomotionCommand::FaceTarget(target);
            }
        }

        if self.is_retreating() {
            if let Some(command) = self.tick_retreat(perception, delta) {
                return command;
            }
            // Retreat истёк: state уже восстановлен, perception решает дальше
        }

        if let Some(target) = perception.visible_target() {
            if !matches!(self.state, EnemyState::Chasing { .. }) {
                crate::log(&format!("AI: {:?} → Chasing", self.state.kind()));
            }
            self.state = EnemyState::Chasing {
                last_known_target_position: target,
                time_since_last_seen: 0.0,
            };
            self.face(origin, target, delta);
            return LocomotionCommand::MoveTo(target);
        }

        if let EnemyState::Chasing {
            last_known_target_position,
            time_since_last_seen,
        } = &mut self.state
        {
            if *time_since_last_seen < self.config.lose_sight_delay {
                *time_since_last_seen += delta;
                let last_known = *last_known_target_position;
                self.face(origin, last_known, delta);
                return LocomotionCommand::MoveTo(last_known);
            }

            crate::log("AI: Chasing → Patrolling (target lost)");
            self.state = EnemyState::patrolling();
        }

        let command = self.tick_patrol(origin, delta, collab);
        if let LocomotionCommand::MoveTo(point) = command {
            self.face(origin, point, delta);
        }
        command
    }

    /// None: retreat закончился на этом тике
    fn tick_retreat(&mut self, perception: &Perception, delta: f32) -> Option<LocomotionCommand> {
        let decay_delay = self.config.dazzle_decay_delay;
        let retreat_speed = self.config.retreat_speed;
        let origin = perception.origin;

        let EnemyState::Retreating {
            elapsed_since_dazzle_start,
            last_known_target_position,
            time_since_last_seen,
        } = &mut self.state
        else {
            return None;
        };

        *elapsed_since_dazzle_start += delta;

        // Память о цели обновляется и во время retreat
        if let Some(target) = perception.visible_target() {
            *last_known_target_position = Some(target);
            *time_since_last_seen = 0.0;
        } else {
            *time_since_last_seen += delta;
        }

        if *elapsed_since_dazzle_start >= decay_delay {
            let resumed = match *last_known_target_position {
                Some(position) => EnemyState::Chasing {
                    last_known_target_position: position,
                    time_since_last_seen: *time_since_last_seen,
                },
                None => EnemyState::patrolling(),
            };
            crate::log(&format!("AI: Retreating → {:?} (dazzle decayed)", resumed.kind()));
            self.state = resumed;
            return None;
        }

        let threat = perception.target_position.or(*last_known_target_position);
        let Some(threat) = threat else {
            return Some(LocomotionCommand::Hold);
        };

        self.face(origin, threat, delta);

        let away = Vec3::new(origin.x - threat.x, 0.0, origin.z - threat.z).normalize_or_zero();
        if away == Vec3::ZERO {
            return Some(LocomotionCommand::FaceTarget(threat));
        }

        Some(LocomotionCommand::MoveTo(origin + away * retreat_speed * delta))
    }

    fn tick_patrol(
        &mut self,
        origin: Vec3,
        delta: f32,
        collab: &mut Collaborators,
    ) -> LocomotionCommand {
        let reach_distance = self.config.walk_point_reach_distance;
        let idle_time = self.config.idle_time;
        let walk_point_range = self.config.walk_point_range;

        let EnemyState::Patrolling {
            walk_target,
            idling,
            idle_timer,
        } = &mut self.state
        else {
            return LocomotionCommand::Hold;
        };

        if *idling {
            *idle_timer -= delta;
            if *idle_timer > 0.0 {
                return LocomotionCommand::Hold;
            }
            *idling = false;
            *idle_timer = 0.0;
        }

        match *walk_target {
            Some(point) if origin.distance(point) < reach_distance => {
                *walk_target = None;
                *idling = true;
                *idle_timer = idle_time;
                LocomotionCommand::Hold
            }
            Some(point) => LocomotionCommand::MoveTo(point),
            None => {
                let candidate = sample_walk_point(origin, walk_point_range, &mut *collab.rng);
                // Probe провалился: пробуем снова на следующем тике
                if collab.spatial.probe_ground_below(candidate) {
                    *walk_target = Some(candidate);
                    LocomotionCommand::MoveTo(candidate)
                } else {
                    LocomotionCommand::Hold
                }
            }
        }
    }

    fn tick_catching(
        &mut self,
        perception: &Perception,
        delta: f32,
        collab: &mut Collaborators,
    ) -> LocomotionCommand {
        let catch_cooldown = self.config.catch_cooldown;

        let EnemyState::Catching { elapsed_since_grab } = &mut self.state else {
            return LocomotionCommand::Hold;
        };

        *elapsed_since_grab += delta;

        if *elapsed_since_grab >= catch_cooldown {
            if let Some(target) = collab.target.as_deref_mut() {
                target.detach();
                target.enable_control();
            }
            crate::log("AI: Catching → Patrolling (catch cooldown elapsed)");
            self.state = EnemyState::patrolling();
            return LocomotionCommand::Hold;
        }

        match perception.target_position {
            Some(target) => {
                self.face(perception.origin, target, delta);
                LocomotionCommand::FaceTarget(target)
            }
            None => LocomotionCommand::Hold,
        }
    }

    /// Kill-delay countdown: идёт в любом состоянии кроме Dying
    fn tick_pending_kill(&mut self, delta: f32, collab: &mut Collaborators) {
        let Some(remaining) = self.pending_kill.as_mut() else {
            return;
        };

        *remaining -= delta;
        if *remaining > 0.0 {
            return;
        }

        self.pending_kill = None;
        if let Some(target) = collab.target.as_deref_mut() {
            target.detach();
        }
        collab.game_state.on_target_eliminated();
        crate::log_info(&format!(
            "AI: target eliminated ({:?}, {:.1}s after grab)",
            self.state.kind(),
            self.config.kill_delay
        ));
    }

    fn tick_dying(&mut self, delta: f32, collab: &mut Collaborators) -> LocomotionCommand {
        let dissolve_time = self.config.dissolve_time;

        let EnemyState::Dying {
            elapsed_since_death_start,
        } = &mut self.state
        else {
            return LocomotionCommand::Hold;
        };

        *elapsed_since_death_start += delta;
        let elapsed = *elapsed_since_death_start;

        collab
            .renderer
            .set_dissolve_amount((elapsed / dissolve_time).clamp(0.0, 1.0));

        if elapsed >= dissolve_time {
            self.removed = true;
            crate::log_info("AI: dissolve complete → removed");
        }

        LocomotionCommand::Hold
    }

    fn begin_catch(&mut self, origin: Vec3, target: Vec3, delta: f32, collab: &mut Collaborators) {
        if matches!(
            self.state,
            EnemyState::Catching { .. } | EnemyState::Dying { .. }
        ) {
            return;
        }

        crate::log_info(&format!("AI: {:?} → Catching (target grabbed)", self.state.kind()));

        self.state = EnemyState::Catching {
            elapsed_since_grab: 0.0,
        };

        // Повторный захват до сигнала не перезапускает kill-delay
        if self.pending_kill.is_none() {
            self.pending_kill = Some(self.config.kill_delay);
        }

        collab.locomotion.stop();
        self.face(origin, target, delta);

        if let Some(control) = collab.target.as_deref_mut() {
            control.disable_control();
            control.freeze_physics();
            control.attach_to(self.config.attach_offset);
        }
    }

    fn begin_dying(&mut self, collab: &mut Collaborators) {
        if self.is_dying() {
            return;
        }

        // Умираем с целью в руках: отпускаем её
        if matches!(self.state, EnemyState::Catching { .. }) {
            if let Some(target) = collab.target.as_deref_mut() {
                target.detach();
                target.enable_control();
            }
        }

        // Dying отменяет несработавший kill
        self.pending_kill = None;

        crate::log_info(&format!(
            "AI: {:?} → Dying (resistance {:.1})",
            self.state.kind(),
            self.dazzle_resistance
        ));

        self.state = EnemyState::Dying {
            elapsed_since_death_start: 0.0,
        };

        collab.locomotion.stop();
        collab.renderer.set_dissolve_amount(0.0);
    }

    fn face(&mut self, origin: Vec3, point: Vec3, delta: f32) {
        if let Some(bearing) = yaw_towards(point - origin) {
            self.heading = smooth_heading(self.heading, bearing, self.config.turn_rate, delta);
        }
    }
}

/// Случайная точка в квадрате ±range вокруг origin (высота сохраняется)
fn sample_walk_point(origin: Vec3, range: f32, rng: &mut dyn RngCore) -> Vec3 {
    let offset_x = rng.gen_range(-range..=range);
    let offset_z = rng.gen_range(-range..=range);
    Vec3::new(origin.x + offset_x, origin.y, origin.z + offset_z)
}
