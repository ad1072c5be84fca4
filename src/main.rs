use bevy::log::LogPlugin;
use bevy::prelude::*;

use chessboard3d::core::settings_persistence::{
    load_or_default, save_settings_to, settings_path, SettingsSource,
};
use chessboard3d::core::{BoardSettings, CorePlugin, WindowConfig};
use chessboard3d::game::GamePlugin;
use chessboard3d::input::{BoardCamera, PointerInputPlugin};
use chessboard3d::rendering::{BoardPlugin, PiecePlugin};

fn main() -> anyhow::Result<()> {
    let path = settings_path();
    let (settings, source) = load_or_default(&path);

    // First run: write the defaults so there is a file to edit
    if matches!(source, SettingsSource::Defaults { reason: None, .. }) {
        if let Err(e) = save_settings_to(&path, &settings) {
            eprintln!("[SETTINGS] Could not write default settings to {:?}: {}", path, e);
        }
    }

    let window_config = WindowConfig::from_settings(&settings);

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window_config.to_window()),
                ..default()
            })
            .set(LogPlugin {
                level: bevy::log::Level::DEBUG,
                filter: settings.log_filter.clone(),
                ..default()
            }),
    );

    app.insert_resource(settings)
        .insert_resource(source)
        .insert_resource(window_config)
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));

    app.add_plugins(CorePlugin)
        .add_plugins(GamePlugin)
        .add_plugins(PointerInputPlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(PiecePlugin)
        .add_systems(Startup, setup_scene);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow::anyhow!("app exited with code {}", code)),
    }
}

/// Camera and lights looking at the board from White's side
fn setup_scene(mut commands: Commands, settings: Res<BoardSettings>) {
    let center = settings.geometry().middle();
    let half = settings.geometry().extent() * 0.5;

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(center + Vec3::new(0.0, half * 2.2, -half * 1.8))
            .looking_at(center, Vec3::Y),
        BoardCamera,
        Name::new("Board Camera"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, -6.0).looking_at(center, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 100000.0,
            ..default()
        },
        Transform::from_translation(center + Vec3::new(0.0, 8.0, 4.0)),
    ));
}
