//! Board state: the 8x8 occupancy grid and the flat piece store
//!
//! The board exclusively owns the cell -> piece mapping. Pieces cache their
//! cell but never own it; [`ChessBoard::commit_move`] is the only place both
//! sides are updated together.

use crate::game::components::{PieceActor, DEFAULT_PIECE_SPEED};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Cell, PieceColor, PieceId, PieceType, BOARD_SIZE};
use bevy::prelude::*;

/// Back rank from file 0 to file 7. King sits before Queen on both sides.
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::King,
    PieceType::Queen,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Scale a captured piece shrinks to
pub const CAPTURED_SCALE: f32 = 0.3;

/// Distance between consecutive captured pieces beside the board
pub const CAPTURED_SPACING: f32 = 0.3;

/// Scalar geometry that anchors logical cells in world space
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct BoardGeometry {
    pub tile_size: f32,
    pub y_offset: f32,
    pub board_center: Vec3,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            tile_size: 1.0,
            y_offset: 0.2,
            board_center: Vec3::ZERO,
        }
    }
}

impl BoardGeometry {
    /// Half-extent of the board shifted by its center
    pub fn bounds(&self) -> Vec3 {
        let half = f32::from(BOARD_SIZE / 2) * self.tile_size;
        Vec3::new(half, 0.0, half) + self.board_center
    }

    /// Height of the tile surface in world space
    pub fn surface_height(&self) -> f32 {
        self.y_offset - self.bounds().y
    }

    /// Edge length of the whole board
    pub fn extent(&self) -> f32 {
        f32::from(BOARD_SIZE) * self.tile_size
    }

    /// Point in the middle of the tile surface
    pub fn middle(&self) -> Vec3 {
        let mid = f32::from(BOARD_SIZE) / 2.0 - 0.5;
        self.grid_point(mid, mid)
    }

    fn half_tile(&self) -> Vec3 {
        Vec3::new(self.tile_size / 2.0, 0.0, self.tile_size / 2.0)
    }

    /// World-space center of a cell
    pub fn cell_center(&self, cell: Cell) -> Vec3 {
        self.grid_point(f32::from(cell.x()), f32::from(cell.y()))
    }

    fn grid_point(&self, x: f32, y: f32) -> Vec3 {
        Vec3::new(x * self.tile_size, self.y_offset, y * self.tile_size) - self.bounds()
            + self.half_tile()
    }

    /// Cell whose tile contains `point` (height is ignored)
    pub fn cell_at_point(&self, point: Vec3) -> Option<Cell> {
        let local = point + self.bounds();
        let fx = (local.x / self.tile_size).floor();
        let fy = (local.z / self.tile_size).floor();
        let size = f32::from(BOARD_SIZE);
        if !(0.0..size).contains(&fx) || !(0.0..size).contains(&fy) {
            return None;
        }
        Cell::new(fx as u8, fy as u8)
    }

    /// Resting place of the `index`-th captured piece of `team`
    ///
    /// White losses line up past file 7 walking +Z, Black losses before
    /// file 0 walking -Z.
    pub fn graveyard_slot(&self, team: PieceColor, index: usize) -> Vec3 {
        let step = CAPTURED_SPACING * self.tile_size * index as f32;
        let last = f32::from(BOARD_SIZE);
        match team {
            PieceColor::White => self.grid_point(last, -1.0) + Vec3::Z * step,
            PieceColor::Black => self.grid_point(-1.0, last) - Vec3::Z * step,
        }
    }
}

/// Occupancy grid plus every piece created at setup
#[derive(Resource, Clone, Debug)]
pub struct ChessBoard {
    geometry: BoardGeometry,
    cells: [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pieces: Vec<PieceActor>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::standard(BoardGeometry::default(), DEFAULT_PIECE_SPEED)
    }
}

impl ChessBoard {
    /// Board with no pieces
    pub fn empty(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            pieces: Vec::new(),
        }
    }

    /// Board in the starting layout: back ranks on 0 and 7, pawns on 1 and 6
    pub fn standard(geometry: BoardGeometry, speed: f32) -> Self {
        let mut board = Self::empty(geometry);
        for (team, back, pawns) in [
            (PieceColor::White, 0, 1),
            (PieceColor::Black, BOARD_SIZE - 1, BOARD_SIZE - 2),
        ] {
            for (file, kind) in (0..BOARD_SIZE).zip(BACK_RANK) {
                board.add_piece_at(team, kind, file, back, speed);
            }
            for file in 0..BOARD_SIZE {
                board.add_piece_at(team, PieceType::Pawn, file, pawns, speed);
            }
        }
        tracing::debug!(
            "[BOARD] Standard layout created with {} pieces",
            board.pieces.len()
        );
        board
    }

    fn add_piece_at(&mut self, team: PieceColor, kind: PieceType, x: u8, y: u8, speed: f32) {
        if let Some(cell) = Cell::new(x, y) {
            self.add_piece(team, kind, cell, speed);
        }
    }

    /// Create a piece, register it on `cell` and snap it to the cell center
    pub fn add_piece(
        &mut self,
        team: PieceColor,
        kind: PieceType,
        cell: Cell,
        speed: f32,
    ) -> PieceId {
        let id = PieceId(self.pieces.len());
        let mut actor = PieceActor::new(team, kind, cell, speed);
        actor.set_target_position(self.cell_center(cell), true);
        self.pieces.push(actor);
        self.place(id, cell);
        id
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn cell_center(&self, cell: Cell) -> Vec3 {
        self.geometry.cell_center(cell)
    }

    /// Raw lookup by coordinates
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is off the board. Callers hold coordinates that
    /// already went through the pick pipeline.
    pub fn piece_at(&self, x: u8, y: u8) -> Option<PieceId> {
        assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "board lookup out of range: ({x}, {y})"
        );
        self.cells[x as usize][y as usize]
    }

    /// Lookup through a validated cell
    pub fn occupant(&self, cell: Cell) -> Option<PieceId> {
        self.cells[cell.x() as usize][cell.y() as usize]
    }

    /// Point `cell` at `piece`. The previous cell of the piece is left as is.
    pub fn place(&mut self, piece: PieceId, cell: Cell) {
        self.cells[cell.x() as usize][cell.y() as usize] = Some(piece);
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells[cell.x() as usize][cell.y() as usize] = None;
    }

    pub fn piece(&self, id: PieceId) -> Option<&PieceActor> {
        self.pieces.get(id.index())
    }

    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut PieceActor> {
        self.pieces.get_mut(id.index())
    }

    pub fn actor(&self, id: PieceId) -> GameResult<&PieceActor> {
        self.piece(id)
            .ok_or(GameError::UnknownPiece { id: id.index() })
    }

    /// Actor standing on `(x, y)`
    pub fn actor_at(&self, x: u8, y: u8) -> GameResult<&PieceActor> {
        self.piece_at(x, y)
            .and_then(|id| self.piece(id))
            .ok_or(GameError::PieceNotFound { x, y })
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &PieceActor)> {
        self.pieces.iter().enumerate().map(|(i, p)| (PieceId(i), p))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Every occupied cell with its piece
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        Cell::all().filter_map(|cell| self.occupant(cell).map(|id| (cell, id)))
    }

    pub fn captured_count(&self, team: PieceColor) -> usize {
        self.pieces
            .iter()
            .filter(|p| p.captured && p.team == team)
            .count()
    }

    /// Take `id` out of play: shrink it and send it to its graveyard slot
    ///
    /// The occupancy grid is not touched; the capturing move overwrites the
    /// cell reference.
    pub fn capture(&mut self, id: PieceId) {
        let Some(team) = self.piece(id).filter(|p| !p.captured).map(|p| p.team) else {
            return;
        };
        let slot = self.geometry.graveyard_slot(team, self.captured_count(team));
        if let Some(actor) = self.piece_mut(id) {
            actor.captured = true;
            actor.set_target_scale(Vec3::splat(CAPTURED_SCALE), false);
            actor.set_target_position(slot, false);
        }
    }

    /// Move `piece` onto `dest`, capturing whatever stands there
    ///
    /// Sets the destination reference, clears the origin reference, updates
    /// the cached cell and eases the piece toward the destination center.
    /// Returns the captured piece, if any.
    pub fn commit_move(&mut self, piece: PieceId, dest: Cell) -> GameResult<Option<PieceId>> {
        let origin = self.actor(piece)?.cell;
        let captured = self.occupant(dest).filter(|&other| other != piece);
        if let Some(victim) = captured {
            self.capture(victim);
        }
        self.clear(origin);
        self.place(piece, dest);
        let center = self.cell_center(dest);
        if let Some(actor) = self.piece_mut(piece) {
            actor.cell = dest;
            actor.set_target_position(center, false);
        }
        Ok(captured)
    }

    /// No actor has anywhere left to ease to
    pub fn is_settled(&self) -> bool {
        self.pieces.iter().all(PieceActor::is_settled)
    }

    /// Ease every actor toward its targets
    pub fn ease_all(&mut self, delta_secs: f32) {
        for actor in &mut self.pieces {
            actor.ease(delta_secs);
        }
    }

    /// Every occupied cell maps to an in-play piece caching that cell, and
    /// every in-play piece is found on its cached cell
    pub fn is_consistent(&self) -> bool {
        let cells_ok = self.occupied().all(|(cell, id)| {
            self.piece(id)
                .is_some_and(|p| !p.captured && p.cell == cell)
        });
        let pieces_ok = self
            .pieces()
            .filter(|(_, p)| !p.captured)
            .all(|(id, p)| self.occupant(p.cell) == Some(id));
        cells_ok && pieces_ok
    }
}
