//! Piece easing and transform sync

use crate::game::components::PieceHandle;
use crate::game::rules::ChessBoard;
use bevy::prelude::*;

/// Advance every piece toward its targets by one frame
///
/// A settled board is only read, so it is not flagged as changed and
/// [`sync_piece_transforms`] skips the frame.
pub fn ease_pieces(time: Res<Time>, mut board: ResMut<ChessBoard>) {
    if board.is_settled() {
        return;
    }
    board.ease_all(time.delta_secs());
}

/// Copy eased actor position and scale onto the rendered entities
///
/// Runs only on frames where the board changed: easing, or a move or
/// rollback that retargeted a piece.
pub fn sync_piece_transforms(
    board: Res<ChessBoard>,
    mut pieces: Query<(&PieceHandle, &mut Transform)>,
) {
    if !board.is_changed() {
        return;
    }
    for (handle, mut transform) in pieces.iter_mut() {
        let Some(actor) = board.piece(handle.0) else {
            continue;
        };
        transform.translation = actor.position;
        transform.scale = actor.scale;
    }
}
