//! Board game logic module - Interactive chessboard with ECS
//!
//! Pure board logic is kept apart from the ECS systems that drive it, so the
//! rules, the interaction machine and the easing can be tested without an
//! `App`.
//!
//! # Module Organization
//!
//! - `types` - [`types::Cell`], teams, piece kinds and ids
//! - `components` - [`components::PieceActor`] easing and the entity link
//! - `rules` - Occupancy grid, piece store, geometry and move validation
//! - `interaction` - Hover/drag state machine
//! - `resources` - Move history and capture tally
//! - `systems` - ECS systems for setup, input and movement
//! - `plugin` - [`GamePlugin`] that registers everything
//!
//! # Data Flow
//!
//! ```text
//! PointerInput ─▶ InteractionMachine::tick ─▶ ChessBoard (grid + actors)
//!                         │                          │
//!                         ▼                          ▼
//!                  MoveAttempted            ease ─▶ Transform
//! ```

pub mod components;
pub mod error;
pub mod events;
pub mod interaction;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::GamePlugin;
