//! Type definitions for board coordinates and piece identity
//!
//! Provides newtype patterns for chess-specific values so that board
//! coordinates, teams and piece ids cannot be mixed up.

use super::error::GameError;
use bevy::prelude::*;
use std::fmt;

/// Number of tiles along each side of the board
pub const BOARD_SIZE: u8 = 8;

/// Logical board coordinate
///
/// `x` is the file (column) and `y` the rank (row), both in `0..8`.
/// A `Cell` can only be built through checked constructors, so every value in
/// circulation is on the board. "No cell" is expressed as `Option<Cell>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Create a cell if `(x, y)` lies on the board
    pub fn new(x: u8, y: u8) -> Option<Self> {
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Self { x, y })
    }

    /// File index (0-7)
    pub fn x(self) -> u8 {
        self.x
    }

    /// Rank index (0-7)
    pub fn y(self) -> u8 {
        self.y
    }

    /// Iterate every cell, file-major (`(0,0), (0,1), ...`)
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Cell { x, y }))
    }

    /// Light squares follow the usual checkerboard, a1 is dark
    pub fn is_light(self) -> bool {
        (self.x + self.y) % 2 == 1
    }
}

impl TryFrom<(i32, i32)> for Cell {
    type Error = GameError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        u8::try_from(x)
            .ok()
            .zip(u8::try_from(y).ok())
            .and_then(|(cx, cy)| Cell::new(cx, cy))
            .ok_or(GameError::OutOfBounds { x, y })
    }
}

impl fmt::Display for Cell {
    /// Algebraic name, e.g. `a1` for (0, 0)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

/// Side a piece belongs to
///
/// `White` is team 0 (ranks 0-1), `Black` is team 1 (ranks 6-7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// Numeric team index
    pub fn team(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    pub fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Rook => "Rook",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }

    /// Conventional material value; the king is not counted
    pub fn material_value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }
}

/// Index of a piece in the board's flat piece store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct PieceId(pub usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}
