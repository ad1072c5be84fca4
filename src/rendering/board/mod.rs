//! Board rendering module
//!
//! Tile meshes, the board slab and hover highlighting.

pub mod board;

// Re-export all public items
pub use board::*;
