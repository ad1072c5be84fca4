//! Piece-related components
//!
//! [`PieceActor`] is the logical piece: identity, cached cell and the
//! target transform its visual eases toward. It lives in the board's flat
//! piece store. [`PieceHandle`] tags the Bevy entity that renders an actor.

use crate::game::types::{Cell, PieceColor, PieceId, PieceType};
use bevy::prelude::*;

/// Fixed easing rate for scale, per second
pub const SCALE_EASE_RATE: f32 = 10.0;

/// Default easing speed for position, per second
pub const DEFAULT_PIECE_SPEED: f32 = 10.0;

/// Distance under which an eased value counts as arrived
pub const SETTLE_EPSILON: f32 = 1e-3;

/// A piece on (or captured from) the board
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct PieceActor {
    pub team: PieceColor,
    pub kind: PieceType,
    /// Cached cell, equal to the board key that maps to this piece
    pub cell: Cell,
    pub position: Vec3,
    pub scale: Vec3,
    pub speed: f32,
    /// Removed from the occupancy grid by a capture
    pub captured: bool,
    target_position: Vec3,
    target_scale: Vec3,
}

impl PieceActor {
    pub fn new(team: PieceColor, kind: PieceType, cell: Cell, speed: f32) -> Self {
        Self {
            team,
            kind,
            cell,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            speed,
            captured: false,
            target_position: Vec3::ZERO,
            target_scale: Vec3::ONE,
        }
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn target_scale(&self) -> Vec3 {
        self.target_scale
    }

    /// Set where the piece eases to; `force` also snaps the current position
    pub fn set_target_position(&mut self, position: Vec3, force: bool) {
        self.target_position = position;
        if force {
            self.position = position;
        }
    }

    /// Set the scale the piece eases to; `force` also snaps the current scale
    pub fn set_target_scale(&mut self, scale: Vec3, force: bool) {
        self.target_scale = scale;
        if force {
            self.scale = scale;
        }
    }

    /// Advance the visual transform by `delta_secs`
    ///
    /// Position approaches its target by `delta_secs * speed`, scale by
    /// `delta_secs * SCALE_EASE_RATE`. Both factors clamp to 1 so a long frame
    /// lands on the target rather than past it.
    pub fn ease(&mut self, delta_secs: f32) {
        let move_t = (delta_secs * self.speed).clamp(0.0, 1.0);
        let scale_t = (delta_secs * SCALE_EASE_RATE).clamp(0.0, 1.0);
        self.position = self.position.lerp(self.target_position, move_t);
        self.scale = self.scale.lerp(self.target_scale, scale_t);

        // The lerp only approaches; land exactly once within tolerance
        if self.position.abs_diff_eq(self.target_position, SETTLE_EPSILON) {
            self.position = self.target_position;
        }
        if self.scale.abs_diff_eq(self.target_scale, SETTLE_EPSILON) {
            self.scale = self.target_scale;
        }
    }

    /// True once the visual transform has caught up with its targets
    pub fn is_settled(&self) -> bool {
        self.position.abs_diff_eq(self.target_position, SETTLE_EPSILON)
            && self.scale.abs_diff_eq(self.target_scale, SETTLE_EPSILON)
    }
}

/// Links a rendered entity to its actor in the piece store
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PieceHandle(pub PieceId);
