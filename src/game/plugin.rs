//! Game plugin - Board state, interaction and easing
//!
//! Registers the board systems and resources. Nothing here touches windows,
//! meshes or materials, so the plugin runs under `MinimalPlugins` in tests.
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] - Must be added first for state and settings
//!
//! # System Organization
//!
//! - `OnEnter(Setup)` - [`setup_board`] inserts the board resources
//! - `Update` in `Setup` - [`finish_setup`] moves to `InGame`
//! - `Update` in `InGame` - [`GameSystems`] chained `Input → Interaction → Visual`
//!
//! Pointer sampling is registered by [`crate::input::PointerInputPlugin`] in
//! `GameSystems::Input`; tests write [`PointerInput`] directly instead.

use super::components::PieceHandle;
use super::events::MoveAttempted;
use super::interaction::PointerInput;
use super::resources::*;
use super::system_sets::GameSystems;
use super::systems::*;
use super::types::{Cell, PieceColor, PieceId, PieceType};
use crate::core::{debug_current_gamestate, GameState};
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveHistory>()
            .init_resource::<CapturedPieces>()
            .init_resource::<PointerInput>()
            .add_message::<MoveAttempted>();

        app.register_type::<MoveHistory>()
            .register_type::<CapturedPieces>()
            .register_type::<MoveRecord>()
            .register_type::<PieceHandle>()
            .register_type::<PieceId>()
            .register_type::<Cell>()
            .register_type::<PieceColor>()
            .register_type::<PieceType>();

        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Interaction,
                GameSystems::Visual,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(OnEnter(GameState::Setup), setup_board);
        app.add_systems(Update, finish_setup.run_if(in_state(GameState::Setup)));

        app.add_systems(
            Update,
            (
                handle_pointer_interaction.in_set(GameSystems::Interaction),
                (ease_pieces, sync_piece_transforms)
                    .chain()
                    .in_set(GameSystems::Visual),
            ),
        );

        // Toggle with F12; needs keyboard input, absent under MinimalPlugins
        if app.world().contains_resource::<ButtonInput<KeyCode>>() {
            app.add_systems(
                Update,
                debug_current_gamestate.run_if(input_toggle_active(false, KeyCode::F12)),
            );
        }
    }
}
