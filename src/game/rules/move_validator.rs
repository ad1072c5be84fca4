//! Destination check for a dropped piece
//!
//! Only occupancy is evaluated: a square held by the mover's own team is
//! blocked, anything else is accepted. Movement shapes, path blocking and
//! check safety are not modelled.

use super::board_state::ChessBoard;
use crate::game::types::{Cell, PieceColor, PieceId};

/// Turn gate. No turn alternation is modelled, every team may always move.
pub fn turn_allows(_team: PieceColor) -> bool {
    true
}

/// Whether `mover` may be dropped on `dest`
///
/// Unknown ids are rejected.
pub fn can_move(board: &ChessBoard, mover: PieceId, dest: Cell) -> bool {
    let Some(actor) = board.piece(mover) else {
        return false;
    };
    if !turn_allows(actor.team) {
        return false;
    }
    match board.occupant(dest).and_then(|id| board.piece(id)) {
        Some(occupant) if occupant.team == actor.team => {
            tracing::debug!(
                "[RULES] {:?} {} blocked by own {} on {}",
                actor.team,
                actor.kind.name(),
                occupant.kind.name(),
                dest
            );
            false
        }
        _ => true,
    }
}
