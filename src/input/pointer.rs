//! Pointer sampling: cursor position, world ray and primary-button edges
//!
//! Once per frame, in `GameSystems::Input`, the cursor is turned into a
//! world-space ray through the [`BoardCamera`] and written together with the
//! left-button edges into the [`PointerInput`] resource. The interaction
//! system consumes it right after.
//!
//! When the cursor is outside the window the ray is `None`, which the
//! interaction machine treats as "pointer not over the board".

use crate::core::error_handling::{handle_query_error, quiet_query};
use crate::game::interaction::PointerInput;
use crate::game::system_sets::GameSystems;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Marker for the camera pointer rays are cast from
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct BoardCamera;

/// Resource tracking the current cursor position within the game window
///
/// - `position`: Current cursor (x, y) in window coordinates, or None if outside window
/// - `last_update`: Seconds since the last trace line (rate-limits logging)
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct CursorState {
    pub position: Option<Vec2>,
    pub last_update: f32,
}

/// Registers pointer sampling; needs a window, so it is left out of headless apps
pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorState>()
            .register_type::<CursorState>()
            .register_type::<BoardCamera>();

        app.add_systems(
            Update,
            (cursor_tracking_system, capture_pointer_sample)
                .chain()
                .in_set(GameSystems::Input),
        );
    }
}

/// Track the cursor position in window coordinates
pub fn cursor_tracking_system(
    q_windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
    mut cursor_state: ResMut<CursorState>,
) {
    cursor_state.last_update += time.delta_secs();
    let Some(window) = handle_query_error(q_windows.single(), "cursor_tracking_system") else {
        cursor_state.position = None;
        return;
    };
    cursor_state.position = window.cursor_position();

    // Rate-limited to one line per second
    if cursor_state.last_update >= 1.0 {
        if let Some(position) = cursor_state.position {
            trace!(
                "[POINTER] Cursor position: ({:.1}, {:.1})",
                position.x,
                position.y
            );
        }
        cursor_state.last_update = 0.0;
    }
}

/// Build this frame's [`PointerInput`] from the cursor, camera and mouse
pub fn capture_pointer_sample(
    cursor_state: Res<CursorState>,
    cameras: Query<(&Camera, &GlobalTransform), With<BoardCamera>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<PointerInput>,
) {
    let ray = cursor_state.position.and_then(|cursor| {
        let (camera, camera_transform) = quiet_query(cameras.single(), "capture_pointer_sample")?;
        match camera.viewport_to_world(camera_transform, cursor) {
            Ok(ray) => Some(ray),
            Err(e) => {
                trace!("[POINTER] No world ray for cursor {:?}: {:?}", cursor, e);
                None
            }
        }
    });

    pointer.ray = ray;
    pointer.pressed |= mouse.just_pressed(MouseButton::Left);
    pointer.released |= mouse.just_released(MouseButton::Left);

    if pointer.pressed {
        trace!("[POINTER] Primary press at {:?}", cursor_state.position);
    }
}
