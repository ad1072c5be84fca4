//! Rendering module - 3D board visualization
//!
//! # Architecture
//!
//! - `board` - Tile meshes and hover highlighting
//! - `pieces` - Piece visuals built from primitive meshes
//! - `utils` - Tile component and tile materials
//!
//! Rendering only reads the board: piece transforms are written by the game
//! plugin's `sync_piece_transforms`, tile materials follow the picking grid.
//! None of this is added in headless apps.
//!
//! # Performance Considerations
//!
//! - Piece meshes are built once and shared via `Handle<Mesh>`
//! - Materials are shared between same-colored pieces and tiles
//! - Tile materials are only rewritten when the highlight actually changes

pub mod board;
pub mod pieces;
pub mod utils;

pub use board::*;
pub use pieces::*;
pub use utils::*;
