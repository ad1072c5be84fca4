//! Core resources for application-wide configuration

use super::error::{CoreError, CoreResult};
use crate::game::components::DEFAULT_PIECE_SPEED;
use crate::game::interaction::DragOptions;
use crate::game::rules::BoardGeometry;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// User-tunable settings, persisted as `settings.json`
///
/// Missing fields fall back to their defaults so older files keep loading.
/// The piece layout is not configurable.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct BoardSettings {
    /// Edge length of one tile in world units
    pub tile_size: f32,

    /// Height of the tile surface above the board origin
    pub y_offset: f32,

    /// World-space shift of the whole board
    pub board_center: [f32; 3],

    /// Easing speed for piece positions, per second
    pub piece_speed: f32,

    /// Whether a held piece follows the pointer
    pub follow_pointer: bool,

    /// Height a followed piece floats above the tiles
    pub drag_lift: f32,

    pub window_width: u32,
    pub window_height: u32,

    /// `tracing` env-filter directive handed to the log plugin
    pub log_filter: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            tile_size: 1.0,
            y_offset: 0.2,
            board_center: [0.0; 3],
            piece_speed: DEFAULT_PIECE_SPEED,
            follow_pointer: false,
            drag_lift: 0.5,
            window_width: 1366,
            window_height: 768,
            log_filter: "info,wgpu=error,naga=warn,chessboard3d=debug".to_string(),
        }
    }
}

impl BoardSettings {
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry {
            tile_size: self.tile_size,
            y_offset: self.y_offset,
            board_center: Vec3::from_array(self.board_center),
        }
    }

    pub fn drag_options(&self) -> DragOptions {
        DragOptions {
            follow_pointer: self.follow_pointer,
            lift: self.drag_lift,
        }
    }

    /// Reject values the board math cannot work with
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(CoreError::InvalidSettings {
                message: format!("tile_size must be positive, got {}", self.tile_size),
            });
        }
        if !(self.piece_speed.is_finite() && self.piece_speed > 0.0) {
            return Err(CoreError::InvalidSettings {
                message: format!("piece_speed must be positive, got {}", self.piece_speed),
            });
        }
        if self.board_center.iter().any(|c| !c.is_finite()) || !self.y_offset.is_finite() {
            return Err(CoreError::InvalidSettings {
                message: "board position must be finite".to_string(),
            });
        }
        Ok(())
    }
}
