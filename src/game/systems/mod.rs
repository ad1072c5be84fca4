//! Board systems - ECS glue around the pure board and interaction types
//!
//! # System Organization
//!
//! - [`game_init`] - Builds the board resources in `Setup` and leaves it
//! - [`input`] - Feeds the pointer sample to the interaction machine
//! - [`movement`] - Eases pieces and mirrors them onto transforms
//!
//! # System Execution Order
//!
//! ```text
//! ┌─────────────────┐
//! │ Input           │  Cursor ray + button edges → PointerInput
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Interaction     │  Hover, pick-up, drop, history
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Visual          │  Easing, transforms, tile materials
//! └─────────────────┘
//! ```
//!
//! The logic itself lives in [`crate::game::rules`] and
//! [`crate::game::interaction`] so it can be tested without an `App`.

pub mod game_init;
pub mod input;
pub mod movement;

pub use game_init::*;
pub use input::*;
pub use movement::*;
