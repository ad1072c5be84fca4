//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame while in `GameState::InGame`:
//! 1. **Input** - Sample the pointer (cursor ray, button edges)
//! 2. **Interaction** - Hover, pick-up and drop against the board
//! 3. **Visual** - Ease pieces and mirror tile highlights
//!
//! Exactly one pointer sample and one easing step happen per frame.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Pointer sampling
    Input,

    /// Interaction state machine and move bookkeeping
    Interaction,

    /// Piece transforms and tile materials
    Visual,
}
