//! Chess game components module
//!
//! Components are pure data structures; the only behaviour on them is the
//! per-frame easing of a piece toward its target transform.

pub mod piece;


pub use piece::*;
