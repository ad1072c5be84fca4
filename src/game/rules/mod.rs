//! Board rules module - Pure board logic without ECS coupling
//!
//! # Module Structure
//!
//! - `board_state` - Occupancy grid, piece store and cell geometry
//! - `move_validator` - Same-team destination check and the turn gate
//!
//! Nothing here touches entities or schedules, so everything is unit tested
//! without building an `App`.

pub mod board_state;
pub mod move_validator;


pub use board_state::{BoardGeometry, ChessBoard, BACK_RANK, CAPTURED_SCALE, CAPTURED_SPACING};
pub use move_validator::{can_move, turn_allows};
