//! Chess game resources - Global game state management
//!
//! - [`MoveHistory`] - Every accepted drop, in order
//! - [`CapturedPieces`] - Per-side capture tally and material balance
//!
//! The board itself ([`crate::game::rules::ChessBoard`]) and the hover/drag
//! machine ([`crate::game::interaction::InteractionMachine`]) are resources
//! too; they live next to the logic they carry.

pub mod captured;
pub mod history;

pub use captured::*;
pub use history::*;
