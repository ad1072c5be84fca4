//! Integration tests for core state management and settings
//!
//! Verifies the Setup → InGame handover in a real Bevy app, that gameplay
//! systems only run in their state, and that settings survive a disk round
//! trip.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use chessboard3d::core::settings_persistence::{
    load_or_default, save_settings_to, SettingsSource,
};
use chessboard3d::core::{debug_current_gamestate, BoardSettings, CorePlugin, GameState};
use chessboard3d::game::GamePlugin;

/// Helper struct to track system executions during tests
#[derive(Resource, Default, Debug)]
struct SystemExecutionTracker {
    setup_executions: u32,
    in_game_executions: u32,
}

fn track_setup_execution(mut tracker: ResMut<SystemExecutionTracker>) {
    tracker.setup_executions += 1;
}

fn track_in_game_execution(mut tracker: ResMut<SystemExecutionTracker>) {
    tracker.in_game_executions += 1;
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn test_initial_state_is_setup() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.update();

    assert_eq!(state(&app), GameState::Setup);
}

#[test]
fn test_setup_hands_over_to_in_game_once() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins((CorePlugin, GamePlugin))
        .init_resource::<SystemExecutionTracker>()
        .add_systems(
            Update,
            (
                track_setup_execution.run_if(in_state(GameState::Setup)),
                track_in_game_execution.run_if(in_state(GameState::InGame)),
            ),
        );

    app.update();
    assert_eq!(state(&app), GameState::Setup);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(state(&app), GameState::InGame);

    let tracker = app.world().resource::<SystemExecutionTracker>();
    assert_eq!(tracker.setup_executions, 1);
    assert_eq!(tracker.in_game_executions, 5);
}

#[test]
fn test_debug_system_runs_in_any_state() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.add_systems(Update, debug_current_gamestate);
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
    assert_eq!(state(&app), GameState::InGame);
}

#[test]
fn test_core_plugin_keeps_inserted_settings() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(BoardSettings {
            piece_speed: 4.0,
            ..Default::default()
        })
        .add_plugins(CorePlugin);
    app.update();

    assert_eq!(app.world().resource::<BoardSettings>().piece_speed, 4.0);
    assert_eq!(
        app.world()
            .resource::<chessboard3d::core::WindowConfig>()
            .size
            .x,
        1366
    );
}

#[test]
fn test_settings_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    let settings = BoardSettings {
        y_offset: 0.35,
        follow_pointer: true,
        ..Default::default()
    };

    save_settings_to(&path, &settings).expect("save");
    let (loaded, source) = load_or_default(&path);

    assert_eq!(loaded, settings);
    assert_eq!(source, SettingsSource::File(path));
}

#[test]
fn test_partial_settings_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "piece_speed": 6.0 }"#).expect("write");

    let (loaded, _) = load_or_default(&path);
    assert_eq!(loaded.piece_speed, 6.0);
    assert_eq!(loaded.tile_size, BoardSettings::default().tile_size);
}
