//! Board rendering utilities - Tile component and tile materials
//!
//! - **Tile**: Component linking a tile mesh to its board cell
//! - **SquareMaterials**: Shared material handles for light, dark and hovered tiles
//!
//! Tiles alternate light and dark by [`Cell::is_light`]. Hovering swaps a
//! tile to the hover material; leaving restores its base colour.

use crate::game::types::Cell;
use crate::input::picking::TileHighlight;
use bevy::color::palettes::tailwind::*;
use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Tile {
    pub cell: Cell,
}

#[derive(Resource, Debug, Clone)]
pub struct SquareMaterials {
    pub light: Handle<StandardMaterial>,
    pub dark: Handle<StandardMaterial>,
    pub hover_matl: Handle<StandardMaterial>,
}

impl FromWorld for SquareMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        SquareMaterials {
            light: materials.add(StandardMaterial {
                base_color: Color::from(STONE_200),
                perceptual_roughness: 0.8,
                ..default()
            }),
            dark: materials.add(StandardMaterial {
                base_color: Color::from(STONE_700),
                perceptual_roughness: 0.8,
                ..default()
            }),
            hover_matl: materials.add(Color::from(AMBER_300)),
        }
    }
}

impl SquareMaterials {
    /// Material a tile should show for its colour and highlight state
    pub fn material_for(&self, tile: &Tile, highlight: TileHighlight) -> &Handle<StandardMaterial> {
        match highlight {
            TileHighlight::Hovered => &self.hover_matl,
            TileHighlight::Normal if tile.cell.is_light() => &self.light,
            TileHighlight::Normal => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materials() -> SquareMaterials {
        let mut world = World::new();
        world.init_resource::<Assets<StandardMaterial>>();
        SquareMaterials::from_world(&mut world)
    }

    #[test]
    fn test_tile_colour_follows_cell() {
        let materials = materials();
        let a1 = Tile {
            cell: Cell::new(0, 0).unwrap(),
        };
        let b1 = Tile {
            cell: Cell::new(1, 0).unwrap(),
        };
        assert_eq!(materials.material_for(&a1, TileHighlight::Normal), &materials.dark);
        assert_eq!(materials.material_for(&b1, TileHighlight::Normal), &materials.light);
    }

    #[test]
    fn test_hover_overrides_colour() {
        let materials = materials();
        for cell in [Cell::new(0, 0).unwrap(), Cell::new(0, 1).unwrap()] {
            let tile = Tile { cell };
            assert_eq!(
                materials.material_for(&tile, TileHighlight::Hovered),
                &materials.hover_matl
            );
        }
    }
}
