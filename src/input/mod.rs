//! Input module - Pointer sampling and grid picking
//!
//! # Architecture
//!
//! - `pointer` - Cursor tracking and the per-frame [`PointerInput`](crate::game::interaction::PointerInput) sample
//! - `picking` - [`GridGeometry`] seam and the ray-vs-plane [`PlaneGridGeometry`]
//!
//! Picking is pure geometry, so the interaction machine can be driven in
//! tests with hand-built rays and no window or camera.

pub mod picking;
pub mod pointer;

pub use picking::{GridGeometry, PlaneGridGeometry, TileHighlight};
pub use pointer::{BoardCamera, CursorState, PointerInputPlugin};
