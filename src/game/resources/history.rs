//! Move history resource

use crate::game::types::{Cell, PieceColor, PieceType};
use bevy::prelude::*;

/// One accepted drop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct MoveRecord {
    pub kind: PieceType,
    pub team: PieceColor,
    pub from: Cell,
    pub to: Cell,
    pub captured: Option<PieceType>,
}

/// Resource to store move history
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
