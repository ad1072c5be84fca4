//! Grid picking: pointer ray -> board cell, plus tile highlight state
//!
//! The interaction machine only sees [`GridGeometry`]. [`PlaneGridGeometry`]
//! implements it by intersecting the pointer ray with the flat tile surface,
//! which is exactly where the tile meshes are built. Only hits inside the
//! board footprint resolve to a cell.

use crate::game::rules::BoardGeometry;
use crate::game::types::{Cell, BOARD_SIZE};
use bevy::prelude::*;

/// Cosmetic state of a tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum TileHighlight {
    #[default]
    Normal,
    Hovered,
}

/// Collaborator that resolves picks and owns tile highlight state
pub trait GridGeometry {
    /// Cell under the pointer ray, if any
    fn pick_cell(&self, ray: Ray3d) -> Option<Cell>;

    /// Point where the ray meets the board surface, on or off the board
    fn surface_point(&self, ray: Ray3d) -> Option<Vec3>;

    fn set_highlight(&mut self, cell: Cell, state: TileHighlight);

    fn highlight(&self, cell: Cell) -> TileHighlight;
}

/// Ray-vs-plane picking against the tile surface
#[derive(Resource, Clone, Debug)]
pub struct PlaneGridGeometry {
    geometry: BoardGeometry,
    highlights: [[TileHighlight; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl PlaneGridGeometry {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            highlights: [[TileHighlight::Normal; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Cells currently in the given state
    pub fn cells_with(&self, state: TileHighlight) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |cell| self.highlight(*cell) == state)
    }
}

impl Default for PlaneGridGeometry {
    fn default() -> Self {
        Self::new(BoardGeometry::default())
    }
}

impl GridGeometry for PlaneGridGeometry {
    fn pick_cell(&self, ray: Ray3d) -> Option<Cell> {
        self.surface_point(ray)
            .and_then(|point| self.geometry.cell_at_point(point))
    }

    fn surface_point(&self, ray: Ray3d) -> Option<Vec3> {
        let origin = Vec3::new(0.0, self.geometry.surface_height(), 0.0);
        ray.intersect_plane(origin, InfinitePlane3d::new(Vec3::Y))
            .map(|distance| ray.get_point(distance))
    }

    fn set_highlight(&mut self, cell: Cell, state: TileHighlight) {
        self.highlights[cell.x() as usize][cell.y() as usize] = state;
    }

    fn highlight(&self, cell: Cell) -> TileHighlight {
        self.highlights[cell.x() as usize][cell.y() as usize]
    }
}
