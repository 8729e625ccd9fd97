//! enemy_behavior_tick + ECS реализации collaborators.

use bevy::prelude::*;

use crate::enemy::{
    Collaborators, Dissolve, EnemyController, EnemyDied, EnemyMotor, EnemyStateChanged,
    GameStateSink, SpatialQuery, TargetControl, TargetEliminated,
};
use crate::player::{Attachment, ControlState, Player};
use crate::world::WalkableGround;
use crate::DeterministicRng;

/// SpatialQuery поверх ECS snapshot (позиция игрока + walkable ground)
pub struct WorldProbe<'a> {
    pub target_position: Option<Vec3>,
    pub ground: &'a WalkableGround,
}

impl SpatialQuery for WorldProbe<'_> {
    fn is_within_radius(&self, center: Vec3, radius: f32) -> bool {
        self.target_position
            .is_some_and(|target| target.distance(center) <= radius)
    }

    fn probe_ground_below(&self, point: Vec3) -> bool {
        self.ground.is_ground_below(point)
    }
}

/// TargetControl над ControlState игрока (holder: схвативший враг)
pub struct CaughtTarget<'a> {
    pub control: &'a mut ControlState,
    pub holder: Entity,
}

impl TargetControl for CaughtTarget<'_> {
    fn disable_control(&mut self) {
        self.control.enabled = false;
    }

    fn enable_control(&mut self) {
        // Цель держит другой враг: control не возвращаем
        if self
            .control
            .attached_to
            .is_some_and(|attachment| attachment.holder != self.holder)
        {
            return;
        }
        self.control.enabled = true;
        self.control.frozen = false;
    }

    fn freeze_physics(&mut self) {
        self.control.velocity = Vec3::ZERO;
        self.control.frozen = true;
    }

    fn attach_to(&mut self, local_offset: Vec3) {
        self.control.attached_to = Some(Attachment {
            holder: self.holder,
            local_offset,
        });
    }

    fn detach(&mut self) {
        // Отцепляем только от себя (другой враг мог перехватить)
        if self
            .control
            .attached_to
            .is_some_and(|attachment| attachment.holder == self.holder)
        {
            self.control.attached_to = None;
        }
    }
}

/// Сигналы game state за один тик одного врага
#[derive(Debug, Default)]
pub struct GameSignals {
    pub target_eliminated: bool,
}

impl GameStateSink for GameSignals {
    fn on_target_eliminated(&mut self) {
        self.target_eliminated = true;
    }
}

/// Система: один тик EnemyController для каждого врага
///
/// 1. Perception (sight/catch радиусы относительно игрока)
/// 2. tick() с ECS collaborators (motor, dissolve, ControlState игрока)
/// 3. EnemyStateChanged / TargetEliminated / EnemyDied + despawn
pub fn enemy_behavior_tick(
    mut commands: Commands,
    mut enemies: Query<(
        Entity,
        &Transform,
        &mut EnemyController,
        &mut EnemyMotor,
        &mut Dissolve,
    )>,
    mut targets: Query<(Entity, &Transform, &mut ControlState), With<Player>>,
    ground: Res<WalkableGround>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
    mut state_events: EventWriter<EnemyStateChanged>,
    mut eliminated_events: EventWriter<TargetEliminated>,
    mut died_events: EventWriter<EnemyDied>,
) {
    let delta = time.delta_secs();

    // Нет игрока (или несколько) → "no target", враги просто патрулируют
    let mut target = targets.single_mut().ok();
    let target_entity = target.as_ref().map(|(entity, _, _)| *entity);
    let target_position = target
        .as_ref()
        .map(|(_, transform, _)| transform.translation);

    for (entity, transform, mut controller, mut motor, mut dissolve) in enemies.iter_mut() {
        if controller.is_removed() {
            continue;
        }

        let probe = WorldProbe {
            target_position,
            ground: &ground,
        };
        let perception = controller.perceive(&probe, transform.translation, target_position);

        let mut caught = target.as_mut().map(|(_, _, control)| CaughtTarget {
            control: &mut **control,
            holder: entity,
        });
        let mut signals = GameSignals::default();
        let before = controller.kind();

        {
            let mut collab = Collaborators {
                spatial: &probe,
                locomotion: &mut *motor,
                target: caught.as_mut().map(|handle| handle as &mut dyn TargetControl),
                game_state: &mut signals,
                renderer: &mut *dissolve,
                rng: &mut rng.rng,
            };

            controller.tick(&perception, delta, &mut collab);
        }

        let after = controller.kind();
        if before != after {
            state_events.write(EnemyStateChanged {
                enemy: entity,
                from: before,
                to: after,
            });
        }

        if signals.target_eliminated {
            crate::log_info(&format!(
                "💀 Enemy {:?} eliminated target {:?}",
                entity, target_entity
            ));
            eliminated_events.write(TargetEliminated {
                enemy: entity,
                target: target_entity,
            });
        }

        if controller.is_removed() {
            crate::log_info(&format!("Enemy {:?} dissolved → despawn", entity));
            died_events.write(EnemyDied { enemy: entity });
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grabbed_by(holder: Entity) -> ControlState {
        ControlState {
            enabled: false,
            frozen: true,
            attached_to: Some(Attachment {
                holder,
                local_offset: Vec3::ZERO,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_release_keeps_other_holders_grab() {
        let first = Entity::from_raw(1);
        let second = Entity::from_raw(2);
        let mut control = grabbed_by(second);

        let mut target = CaughtTarget {
            control: &mut control,
            holder: first,
        };
        target.detach();
        target.enable_control();

        assert!(!control.enabled);
        assert!(control.frozen);
        assert_eq!(control.attached_to.map(|a| a.holder), Some(second));
    }

    #[test]
    fn test_release_by_own_holder_restores_control() {
        let holder = Entity::from_raw(1);
        let mut control = grabbed_by(holder);

        let mut target = CaughtTarget {
            control: &mut control,
            holder,
        };
        target.detach();
        target.enable_control();

        assert!(control.enabled);
        assert!(!control.frozen);
        assert!(control.attached_to.is_none());
    }

    #[test]
    fn test_enable_control_without_attachment() {
        let mut control = ControlState {
            enabled: false,
            frozen: true,
            ..Default::default()
        };

        CaughtTarget {
            control: &mut control,
            holder: Entity::from_raw(3),
        }
        .enable_control();

        assert!(control.enabled);
        assert!(!control.frozen);
    }
}
