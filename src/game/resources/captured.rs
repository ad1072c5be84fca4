//! Capture tally
//!
//! Captured actors stay in the piece store, shrunk beside the board. This
//! resource only counts what each side has taken, in capture order, for
//! logging and the material balance.

use crate::game::types::{PieceColor, PieceType};
use bevy::prelude::*;

#[derive(Resource, Default, Debug, Reflect)]
#[reflect(Resource)]
pub struct CapturedPieces {
    /// Black pieces taken by White
    pub by_white: Vec<PieceType>,
    /// White pieces taken by Black
    pub by_black: Vec<PieceType>,
}

impl CapturedPieces {
    /// Record that a `victim_team` piece of `kind` left the board
    pub fn record(&mut self, victim_team: PieceColor, kind: PieceType) {
        self.taken_by_mut(victim_team.opponent()).push(kind);
    }

    /// Pieces taken by `team`
    pub fn taken_by(&self, team: PieceColor) -> &[PieceType] {
        match team {
            PieceColor::White => &self.by_white,
            PieceColor::Black => &self.by_black,
        }
    }

    fn taken_by_mut(&mut self, team: PieceColor) -> &mut Vec<PieceType> {
        match team {
            PieceColor::White => &mut self.by_white,
            PieceColor::Black => &mut self.by_black,
        }
    }

    /// Material `team` has taken
    pub fn material_for(&self, team: PieceColor) -> i32 {
        self.taken_by(team).iter().map(|k| k.material_value()).sum()
    }

    /// Positive when White is ahead
    pub fn material_advantage(&self) -> i32 {
        self.material_for(PieceColor::White) - self.material_for(PieceColor::Black)
    }

    pub fn total(&self) -> usize {
        self.by_white.len() + self.by_black.len()
    }

    pub fn clear(&mut self) {
        self.by_white.clear();
        self.by_black.clear();
    }
}
