//! Enemy FSM состояния и locomotion команды.

use bevy::prelude::*;

/// Состояние врага (ровно одно активно)
///
/// Patrolling → Chasing → Catching → Patrolling, плюс Retreating (ослеплён
/// фонарём) и терминальный Dying. Все таймеры: явные поля (секунды),
/// обновляются в EnemyController::tick.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum EnemyState {
    /// Patrol: случайные точки в радиусе walk_point_range
    Patrolling {
        /// Текущая patrol точка (None → сэмплируем новую)
        walk_target: Option<Vec3>,
        /// Стоим на достигнутой точке
        idling: bool,
        /// Сколько ещё стоять (секунды)
        idle_timer: f32,
    },

    /// Chase: бежим к цели (или к последней известной позиции)
    Chasing {
        last_known_target_position: Vec3,
        time_since_last_seen: f32,
    },

    /// Catch: цель схвачена, perception отключен
    ///
    /// Здесь только таймер release (catch_cooldown). Kill-delay живёт на
    /// EnemyController и переживает выход из Catching.
    Catching { elapsed_since_grab: f32 },

    /// Retreat: пятимся от света, смотрим на цель
    ///
    /// Perception переходы приостановлены, но память о цели обновляется:
    /// по окончании retreat возвращаемся в Chasing с накопленным
    /// time_since_last_seen (или в Patrolling если цели не было).
    Retreating {
        elapsed_since_dazzle_start: f32,
        last_known_target_position: Option<Vec3>,
        time_since_last_seen: f32,
    },

    /// Dying: dissolve, затем удаление. Терминальное.
    Dying {
        elapsed_since_death_start: f32,
    },
}

impl Default for EnemyState {
    fn default() -> Self {
        Self::patrolling()
    }
}

impl EnemyState {
    /// Свежий patrol (без точки, без idle)
    pub fn patrolling() -> Self {
        Self::Patrolling {
            walk_target: None,
            idling: false,
            idle_timer: 0.0,
        }
    }

    pub fn kind(&self) -> EnemyStateKind {
        match self {
            EnemyState::Patrolling { .. } => EnemyStateKind::Patrolling,
            EnemyState::Chasing { .. } => EnemyStateKind::Chasing,
            EnemyState::Catching { .. } => EnemyStateKind::Catching,
            EnemyState::Retreating { .. } => EnemyStateKind::Retreating,
            EnemyState::Dying { .. } => EnemyStateKind::Dying,
        }
    }
}

/// Тег состояния без payload (для логов и сравнений)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EnemyStateKind {
    Patrolling,
    Chasing,
    Catching,
    Retreating,
    Dying,
}

/// Locomotion intent на текущий тик
///
/// Выполняется внешним locomotion provider (в headless режиме: drive_enemy_motors).
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum LocomotionCommand {
    /// Идти к точке (world coordinates)
    MoveTo(Vec3),
    /// Стоять на месте
    Hold,
    /// Стоять и поворачиваться к точке
    FaceTarget(Vec3),
}

impl Default for LocomotionCommand {
    fn default() -> Self {
        Self::Hold
    }
}
