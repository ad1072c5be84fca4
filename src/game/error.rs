//! Error types for game module
//!
//! Board and interaction failures are silent state corrections, so these
//! errors only cover checked conversions and lookups by id.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside the 8x8 board
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Piece not found at expected position
    #[error("Piece not found at position ({x}, {y})")]
    PieceNotFound { x: u8, y: u8 },

    /// Piece id does not index the piece store
    #[error("Unknown piece id {id}")]
    UnknownPiece { id: usize },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
