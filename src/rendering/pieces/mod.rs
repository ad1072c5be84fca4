//! Chess pieces rendering module
//!
//! Primitive-mesh piece visuals and the spawner seam.

pub mod pieces;

// Re-export all public items
pub use pieces::*;
