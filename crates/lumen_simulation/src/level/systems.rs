//! Level systems.

use bevy::prelude::*;

use crate::enemy::TargetEliminated;
use crate::level::{LevelCompleted, LevelExit, LevelResetRequested, LevelState};
use crate::player::{ControlState, Player, PlayerSpawn};

/// Система: TargetEliminated → счётчик + LevelResetRequested
pub fn handle_target_eliminated(
    mut eliminated_events: EventReader<TargetEliminated>,
    mut level: ResMut<LevelState>,
    mut reset_events: EventWriter<LevelResetRequested>,
) {
    for event in eliminated_events.read() {
        level.resets_requested += 1;
        crate::log_info(&format!(
            "Level: reset requested #{} (eliminated by {:?})",
            level.resets_requested, event.enemy
        ));
        reset_events.write(LevelResetRequested { cause: event.enemy });
    }
}

/// Система: LevelResetRequested → игрок на spawn, управление восстановлено
pub fn reset_players(
    mut reset_events: EventReader<LevelResetRequested>,
    mut players: Query<(&mut Transform, &mut ControlState, &PlayerSpawn), With<Player>>,
) {
    // Несколько запросов за тик → один reset
    if reset_events.read().count() == 0 {
        return;
    }

    for (mut transform, mut control, spawn) in players.iter_mut() {
        *transform = spawn.transform;
        *control = ControlState::default();
    }
}

/// Система: игрок в радиусе LevelExit → levels_completed + LevelCompleted
///
/// Схваченный игрок (attached/frozen) exit не активирует.
pub fn detect_level_exit(
    mut exits: Query<(Entity, &Transform, &mut LevelExit), Without<Player>>,
    players: Query<(Entity, &Transform, &ControlState), With<Player>>,
    mut level: ResMut<LevelState>,
    mut completed_events: EventWriter<LevelCompleted>,
) {
    for (exit_entity, exit_transform, mut exit) in exits.iter_mut() {
        if exit.triggered {
            continue;
        }

        let reached = players.iter().find(|(_, transform, control)| {
            control.accepts_input()
                && transform.translation.distance(exit_transform.translation) <= exit.radius
        });
        let Some((player_entity, _, _)) = reached else {
            continue;
        };

        exit.triggered = true;
        level.levels_completed += 1;
        crate::log_info(&format!(
            "Level: completed #{} (player {:?} reached exit {:?})",
            level.levels_completed, player_entity, exit_entity
        ));
        completed_events.write(LevelCompleted {
            exit: exit_entity,
            player: player_entity,
        });
    }
}

/// Spawn выхода с уровня в позиции
pub fn spawn_level_exit(world: &mut World, position: Vec3, exit: LevelExit) -> Entity {
    world
        .spawn((Transform::from_translation(position), exit))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit_app() -> App {
        let mut app = App::new();
        app.init_resource::<LevelState>()
            .add_event::<LevelCompleted>()
            .add_systems(Update, detect_level_exit);
        app
    }

    fn completed(app: &App) -> Vec<LevelCompleted> {
        let events = app.world().resource::<Events<LevelCompleted>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).cloned().collect()
    }

    #[test]
    fn test_exit_completes_level_once() {
        let mut app = exit_app();
        let exit = spawn_level_exit(app.world_mut(), Vec3::new(0.0, 0.0, -5.0), LevelExit::default());
        let player = app
            .world_mut()
            .spawn((Player, Transform::from_xyz(0.0, 0.0, -4.0), ControlState::default()))
            .id();

        app.update();
        app.update();

        assert_eq!(app.world().resource::<LevelState>().levels_completed, 1);
        assert!(app.world().get::<LevelExit>(exit).unwrap().triggered);
        let events = completed(&app);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].exit, exit);
        assert_eq!(events[0].player, player);
    }

    #[test]
    fn test_exit_ignores_distant_and_held_player() {
        let mut app = exit_app();
        let exit = spawn_level_exit(app.world_mut(), Vec3::ZERO, LevelExit::default());
        let distant = app
            .world_mut()
            .spawn((Player, Transform::from_xyz(0.0, 0.0, 3.0), ControlState::default()))
            .id();
        app.world_mut().spawn((
            Player,
            Transform::from_xyz(0.5, 0.0, 0.0),
            ControlState {
                enabled: false,
                frozen: true,
                ..Default::default()
            },
        ));

        app.update();
        assert_eq!(app.world().resource::<LevelState>().levels_completed, 0);
        assert!(!app.world().get::<LevelExit>(exit).unwrap().triggered);

        app.world_mut()
            .get_mut::<Transform>(distant)
            .unwrap()
            .translation = Vec3::new(0.0, 0.0, 1.0);
        app.update();
        assert_eq!(app.world().resource::<LevelState>().levels_completed, 1);
    }

    #[test]
    fn test_elimination_increments_resets() {
        let mut app = App::new();
        app.init_resource::<LevelState>()
            .add_event::<TargetEliminated>()
            .add_event::<LevelResetRequested>()
            .add_systems(Update, handle_target_eliminated);

        let enemy = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(TargetEliminated {
            enemy,
            target: None,
        });
        app.update();

        assert_eq!(app.world().resource::<LevelState>().resets_requested, 1);

        // Событие уже прочитано: повторно не считаем
        app.update();
        assert_eq!(app.world().resource::<LevelState>().resets_requested, 1);
    }

    #[test]
    fn test_reset_restores_player_spawn_and_control() {
        let mut app = App::new();
        app.add_event::<LevelResetRequested>()
            .add_systems(Update, reset_players);

        let spawn = Transform::from_xyz(1.0, 0.0, 2.0);
        let player = app
            .world_mut()
            .spawn((
                Player,
                Transform::from_xyz(9.0, 0.0, 9.0),
                ControlState {
                    enabled: false,
                    frozen: true,
                    ..Default::default()
                },
                PlayerSpawn { transform: spawn },
            ))
            .id();

        app.world_mut()
            .send_event(LevelResetRequested { cause: player });
        app.update();

        let world = app.world();
        assert_eq!(world.get::<Transform>(player).unwrap().translation, spawn.translation);
        let control = world.get::<ControlState>(player).unwrap();
        assert!(control.enabled);
        assert!(!control.frozen);
        assert!(control.attached_to.is_none());
    }
}
