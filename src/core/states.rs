//! Application state machine
//!
//! ```text
//! [Setup] ──tiles, pieces and occupancy grid built──▶ [InGame]
//! ```
//!
//! Setup is a one-shot, non-reentrant phase. Pointer input is only sampled
//! and interpreted in `InGame`, so a pick can never be resolved against a
//! half-built board.

use bevy::prelude::*;

#[derive(Clone, Copy, Resource, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum GameState {
    /// Board, tiles and pieces are being created (starting state)
    #[default]
    Setup,

    /// Board is interactive
    InGame,
}

/// Logs the current game state
pub fn debug_current_gamestate(state: Res<State<GameState>>) {
    debug!("[STATE] Current GameState: {:?}", state.get());
}

/// Logs every state change once, when it happens
pub fn log_state_transitions(state: Res<State<GameState>>) {
    if state.is_changed() {
        info!("[STATE] Entered {:?}", state.get());
    }
}
