//! Pointer-driven hover and pick-up/drop state machine
//!
//! ```text
//! Idle ──pointer over tile──▶ Hovering(cell) ──press on piece──▶ Dragging(piece, origin)
//!  ▲                              │  ▲                                  │
//!  └──────pointer leaves──────────┘  └──────────release (any outcome)───┘
//! ```
//!
//! One [`PointerInput`] is consumed per [`InteractionMachine::tick`]:
//! resolve the pick, update hover, then handle press and release in that
//! order. A release asks [`can_move`]; accepted drops commit through
//! [`ChessBoard::commit_move`], rejected ones ease the piece back to its
//! origin and leave the board untouched. The drag slot is cleared either way.

use crate::game::rules::{can_move, ChessBoard};
use crate::game::types::{Cell, PieceId};
use crate::input::picking::{GridGeometry, TileHighlight};
use bevy::prelude::*;

/// One pointer sample
///
/// Also the per-frame resource written by pointer sampling and consumed by
/// the interaction system; the button edges are cleared once consumed.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    /// Pointer ray in world space, `None` when the cursor is outside the view
    pub ray: Option<Ray3d>,
    /// Primary button went down this sample
    pub pressed: bool,
    /// Primary button went up this sample
    pub released: bool,
}

/// Piece currently held by the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pub piece: PieceId,
    pub origin: Cell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Hovering(Cell),
    Dragging { piece: PieceId, origin: Cell },
}

/// Result of releasing a dragged piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted {
        piece: PieceId,
        from: Cell,
        to: Cell,
        captured: Option<PieceId>,
    },
    /// `attempted` is `None` when the release happened off the board
    Rejected {
        piece: PieceId,
        origin: Cell,
        attempted: Option<Cell>,
    },
}

/// Optional drag behaviour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOptions {
    /// Ease the held piece toward the pointer while dragging
    pub follow_pointer: bool,
    /// Height above the surface a followed piece hovers at
    pub lift: f32,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            follow_pointer: false,
            lift: 0.5,
        }
    }
}

/// Single-slot hover/drag machine
#[derive(Resource, Clone, Debug, Default)]
pub struct InteractionMachine {
    hover: Option<Cell>,
    drag: Option<DragState>,
    options: DragOptions,
}

impl InteractionMachine {
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn hovered(&self) -> Option<Cell> {
        self.hover
    }

    pub fn dragging(&self) -> Option<DragState> {
        self.drag
    }

    pub fn options(&self) -> DragOptions {
        self.options
    }

    pub fn state(&self) -> InteractionState {
        match (self.drag, self.hover) {
            (Some(DragState { piece, origin }), _) => InteractionState::Dragging { piece, origin },
            (None, Some(cell)) => InteractionState::Hovering(cell),
            (None, None) => InteractionState::Idle,
        }
    }

    /// Process one pointer sample
    pub fn tick<G: GridGeometry>(
        &mut self,
        input: &PointerInput,
        geometry: &mut G,
        board: &mut ChessBoard,
    ) -> Option<MoveOutcome> {
        let picked = input.ray.and_then(|ray| geometry.pick_cell(ray));
        self.update_hover(picked, geometry);

        if input.pressed {
            self.begin_drag(board);
        }

        if self.options.follow_pointer {
            self.follow(input, geometry, board);
        }

        if input.released {
            return self.end_drag(board);
        }
        None
    }

    fn update_hover<G: GridGeometry>(&mut self, picked: Option<Cell>, geometry: &mut G) {
        if picked == self.hover {
            return;
        }
        if let Some(previous) = self.hover {
            geometry.set_highlight(previous, TileHighlight::Normal);
        }
        if let Some(cell) = picked {
            geometry.set_highlight(cell, TileHighlight::Hovered);
        }
        tracing::trace!("[INPUT] Hover {:?} -> {:?}", self.hover, picked);
        self.hover = picked;
    }

    fn begin_drag(&mut self, board: &ChessBoard) {
        if self.drag.is_some() {
            return;
        }
        let Some(cell) = self.hover else {
            return;
        };
        if let Some(piece) = board.occupant(cell) {
            tracing::debug!("[INPUT] Picked up piece {:?} on {}", piece, cell);
            self.drag = Some(DragState {
                piece,
                origin: cell,
            });
        }
    }

    fn follow<G: GridGeometry>(&self, input: &PointerInput, geometry: &G, board: &mut ChessBoard) {
        let Some(drag) = self.drag else {
            return;
        };
        let Some(point) = input.ray.and_then(|ray| geometry.surface_point(ray)) else {
            return;
        };
        if let Some(actor) = board.piece_mut(drag.piece) {
            actor.set_target_position(point + Vec3::Y * self.options.lift, false);
        }
    }

    fn end_drag(&mut self, board: &mut ChessBoard) -> Option<MoveOutcome> {
        let drag = self.drag.take()?;
        let target = self.hover.filter(|cell| can_move(board, drag.piece, *cell));

        if let Some(to) = target {
            match board.commit_move(drag.piece, to) {
                Ok(captured) => {
                    tracing::debug!(
                        "[INPUT] Dropped {:?} {} -> {} (captured: {:?})",
                        drag.piece, drag.origin, to, captured
                    );
                    return Some(MoveOutcome::Accepted {
                        piece: drag.piece,
                        from: drag.origin,
                        to,
                        captured,
                    });
                }
                Err(e) => tracing::warn!("[INPUT] Move commit failed: {}", e),
            }
        }

        let center = board.cell_center(drag.origin);
        if let Some(actor) = board.piece_mut(drag.piece) {
            actor.set_target_position(center, false);
        }
        tracing::debug!(
            "[INPUT] Rejected drop of {:?} on {:?}, returning to {}",
            drag.piece, self.hover, drag.origin
        );
        Some(MoveOutcome::Rejected {
            piece: drag.piece,
            origin: drag.origin,
            attempted: self.hover,
        })
    }
}
