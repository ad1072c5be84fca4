//! Board creation and tile highlighting
//!
//! Uses the batch spawning pattern: all 64 tiles are collected first and
//! spawned in one pass. Tiles are placed at the same cell centres the picking
//! geometry resolves, so what the user sees is what the pointer hits.

use crate::core::{BoardSettings, GameState};
use crate::game::system_sets::GameSystems;
use crate::game::types::Cell;
use crate::input::picking::{GridGeometry, PlaneGridGeometry, TileHighlight};
use crate::rendering::utils::{SquareMaterials, Tile};
use bevy::prelude::*;

/// Marker for the slab under the tiles
#[derive(Component)]
pub struct Board;

pub(crate) fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    materials: Res<SquareMaterials>,
    settings: Res<BoardSettings>,
) {
    let geometry = settings.geometry();
    let tile_mesh = meshes.add(Plane3d::default().mesh().size(geometry.tile_size, geometry.tile_size));

    let tiles: Vec<_> = Cell::all()
        .map(|cell| {
            let tile = Tile { cell };
            let material = materials.material_for(&tile, TileHighlight::Normal).clone();
            (
                Mesh3d(tile_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(geometry.cell_center(cell)),
                tile,
                Name::new(format!("Tile {}", cell)),
            )
        })
        .collect();
    let count = tiles.len();
    commands.spawn_batch(tiles);

    // Slab from the board origin up to just under the tile surface
    let thickness = geometry.y_offset.max(0.01);
    let width = geometry.extent() + geometry.tile_size * 0.5;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(width, thickness, width))),
        MeshMaterial3d(standard_materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.16, 0.1),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_translation(geometry.middle() - Vec3::Y * (thickness * 0.5 + 0.001)),
        Board,
        Name::new("Board"),
    ));

    info!("[BOARD] Spawned {} tiles", count);
}

/// Mirror the picking grid's highlight state onto tile materials
pub fn update_tile_highlights(
    grid: Res<PlaneGridGeometry>,
    materials: Res<SquareMaterials>,
    mut tiles: Query<(&Tile, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    if !grid.is_changed() {
        return;
    }
    for (tile, mut material) in tiles.iter_mut() {
        let wanted = materials.material_for(tile, grid.highlight(tile.cell));
        // Only write on a real change to keep material change detection quiet
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SquareMaterials>()
            .register_type::<Tile>()
            .add_systems(OnEnter(GameState::Setup), create_board)
            .add_systems(Update, update_tile_highlights.in_set(GameSystems::Visual));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u8, y: u8) -> Cell {
        Cell::new(x, y).expect("on board")
    }

    fn spawn_tile(app: &mut App, cell: Cell) -> Entity {
        let tile = Tile { cell };
        let material = app
            .world()
            .resource::<SquareMaterials>()
            .material_for(&tile, TileHighlight::Normal)
            .clone();
        app.world_mut().spawn((tile, MeshMaterial3d(material))).id()
    }

    fn material_of(app: &App, tile: Entity) -> Handle<StandardMaterial> {
        app.world()
            .get::<MeshMaterial3d<StandardMaterial>>(tile)
            .map(|m| m.0.clone())
            .expect("tile material")
    }

    fn set_highlight(app: &mut App, cell: Cell, state: TileHighlight) {
        app.world_mut()
            .resource_mut::<PlaneGridGeometry>()
            .set_highlight(cell, state);
    }

    #[test]
    fn test_highlight_mirrors_onto_tile_materials() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>()
            .init_resource::<SquareMaterials>()
            .init_resource::<PlaneGridGeometry>()
            .add_systems(Update, update_tile_highlights);
        let materials = app.world().resource::<SquareMaterials>().clone();

        let a1 = spawn_tile(&mut app, cell(0, 0));
        let b1 = spawn_tile(&mut app, cell(1, 0));
        set_highlight(&mut app, cell(1, 0), TileHighlight::Hovered);
        app.update();

        assert_eq!(material_of(&app, b1), materials.hover_matl);
        assert_eq!(material_of(&app, a1), materials.dark);

        // Hover moves off b1: it gets its own base colour back
        set_highlight(&mut app, cell(1, 0), TileHighlight::Normal);
        set_highlight(&mut app, cell(0, 0), TileHighlight::Hovered);
        app.update();

        assert_eq!(material_of(&app, b1), materials.light);
        assert_eq!(material_of(&app, a1), materials.hover_matl);
    }

    #[test]
    fn test_untouched_grid_leaves_materials_alone() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>()
            .init_resource::<SquareMaterials>()
            .init_resource::<PlaneGridGeometry>()
            .add_systems(Update, update_tile_highlights);
        let materials = app.world().resource::<SquareMaterials>().clone();

        let a1 = spawn_tile(&mut app, cell(0, 0));
        app.update();
        assert_eq!(material_of(&app, a1), materials.dark);

        // Nothing flagged the grid since the last run, so this is not undone
        app.world_mut()
            .get_mut::<MeshMaterial3d<StandardMaterial>>(a1)
            .expect("tile material")
            .0 = materials.hover_matl.clone();
        app.update();
        assert_eq!(material_of(&app, a1), materials.hover_matl);
    }
}
