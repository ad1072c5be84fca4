//! Board construction for the `Setup` state
//!
//! `setup_board` runs `OnEnter(GameState::Setup)` and inserts every resource
//! the interaction pipeline needs, built from [`BoardSettings`]. Rendering
//! spawns tiles and piece meshes after it in the same schedule. `finish_setup`
//! then moves the app to `InGame` on the next frame.

use crate::core::{BoardSettings, GameState};
use crate::game::interaction::{InteractionMachine, PointerInput};
use crate::game::resources::{CapturedPieces, MoveHistory};
use crate::game::rules::ChessBoard;
use crate::input::picking::PlaneGridGeometry;
use bevy::prelude::*;

/// Build the board, the tile grid and the interaction machine
pub fn setup_board(
    mut commands: Commands,
    settings: Res<BoardSettings>,
    mut move_history: ResMut<MoveHistory>,
    mut captured_pieces: ResMut<CapturedPieces>,
) {
    let geometry = settings.geometry();
    let board = ChessBoard::standard(geometry, settings.piece_speed);
    info!(
        "[GAME_INIT] Board built: {} pieces, tile size {}, surface at y={}",
        board.piece_count(),
        geometry.tile_size,
        geometry.surface_height()
    );

    commands.insert_resource(board);
    commands.insert_resource(PlaneGridGeometry::new(geometry));
    commands.insert_resource(InteractionMachine::new(settings.drag_options()));
    commands.insert_resource(PointerInput::default());

    move_history.clear();
    captured_pieces.clear();
    debug!(
        "[GAME_INIT] Drag options: {:?}",
        settings.drag_options()
    );
}

/// Leave `Setup` once the board exists
pub fn finish_setup(board: Option<Res<ChessBoard>>, mut next_state: ResMut<NextState<GameState>>) {
    if board.is_none() {
        warn!("[GAME_INIT] Board resource missing, staying in Setup");
        return;
    }
    info!("[GAME_INIT] Setup complete, board is interactive");
    next_state.set(GameState::InGame);
}
