use crate::game::types::{Cell, PieceId};
use bevy::prelude::*;

/// Written once per drop, accepted or not
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAttempted {
    pub piece: PieceId,
    pub from: Cell,
    /// `None` when released off the board
    pub to: Option<Cell>,
    pub accepted: bool,
}
