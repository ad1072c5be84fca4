//! Runs the hover/drag machine against the latest pointer sample
//!
//! Accepted drops are appended to [`MoveHistory`] and captures tallied in
//! [`CapturedPieces`]; every drop, accepted or not, is announced with a
//! [`MoveAttempted`] message.

use crate::game::events::MoveAttempted;
use crate::game::interaction::{InteractionMachine, MoveOutcome, PointerInput};
use crate::game::resources::{CapturedPieces, MoveHistory, MoveRecord};
use crate::game::rules::ChessBoard;
use crate::input::picking::PlaneGridGeometry;
use bevy::prelude::*;

pub fn handle_pointer_interaction(
    mut pointer: ResMut<PointerInput>,
    mut machine: ResMut<InteractionMachine>,
    mut grid: ResMut<PlaneGridGeometry>,
    mut board: ResMut<ChessBoard>,
    mut move_history: ResMut<MoveHistory>,
    mut captured_pieces: ResMut<CapturedPieces>,
    mut attempts: MessageWriter<MoveAttempted>,
) {
    let sample = *pointer;
    let hover_before = machine.hovered();
    let outcome = machine.tick(
        &sample,
        grid.bypass_change_detection(),
        board.bypass_change_detection(),
    );

    // Flag only real changes so the render mirrors can skip quiet frames
    if machine.hovered() != hover_before {
        grid.set_changed();
    }
    let following = machine.options().follow_pointer && machine.dragging().is_some();
    if outcome.is_some() || following {
        board.set_changed();
    }

    // Edges are one-shot; the ray stays until the next sample replaces it
    if sample.pressed || sample.released {
        pointer.pressed = false;
        pointer.released = false;
    }

    let Some(outcome) = outcome else {
        return;
    };

    match outcome {
        MoveOutcome::Accepted {
            piece,
            from,
            to,
            captured,
        } => {
            let Some(actor) = board.piece(piece) else {
                error!("[INPUT] Accepted move for unknown piece {:?}", piece);
                return;
            };
            let (team, kind) = (actor.team, actor.kind);

            let captured_kind = captured.and_then(|id| board.piece(id)).map(|victim| {
                captured_pieces.record(victim.team, victim.kind);
                victim.kind
            });

            info!(
                "[INPUT] {:?} {} {} -> {}{}",
                team,
                kind.name(),
                from,
                to,
                captured_kind
                    .map(|k| format!(" takes {}", k.name()))
                    .unwrap_or_default()
            );

            move_history.add_move(MoveRecord {
                kind,
                team,
                from,
                to,
                captured: captured_kind,
            });
            attempts.write(MoveAttempted {
                piece,
                from,
                to: Some(to),
                accepted: true,
            });
        }
        MoveOutcome::Rejected {
            piece,
            origin,
            attempted,
        } => {
            attempts.write(MoveAttempted {
                piece,
                from: origin,
                to: attempted,
                accepted: false,
            });
        }
    }
}
