//! Interactive 3D chessboard
//!
//! Pieces are picked up by pressing on their tile and dropped by releasing
//! over another one. Drops onto a friendly piece are refused and the piece
//! eases back; drops onto an enemy piece capture it.
//!
//! - [`core`] - State machine, settings, window config
//! - [`game`] - Board state, interaction machine, easing (headless)
//! - [`input`] - Pointer sampling and grid picking
//! - [`rendering`] - Tile and piece visuals

pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
