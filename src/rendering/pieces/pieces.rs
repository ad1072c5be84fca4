//! Chess piece 3D rendering - Data-driven spawning from the piece store
//!
//! Every actor in [`ChessBoard`] gets one root entity tagged with
//! [`PieceHandle`]; its visible parts are children built from primitive
//! meshes, so no model assets are needed. The root transform is driven by the
//! actor's eased position and scale (see `sync_piece_transforms`).
//!
//! Spawning goes through the [`PieceSpawner`] seam so the layout walk can be
//! tested without a renderer.

use crate::core::GameState;
use crate::game::components::PieceHandle;
use crate::game::rules::ChessBoard;
use crate::game::systems::setup_board;
use crate::game::types::{PieceColor, PieceId, PieceType};
use bevy::prelude::*;

/// Creates the visual for one piece actor
pub trait PieceSpawner {
    type Handle;

    fn spawn_piece(
        &mut self,
        kind: PieceType,
        team: PieceColor,
        id: PieceId,
        position: Vec3,
    ) -> Self::Handle;
}

/// Spawn a visual for every actor on the board, in piece-store order
pub fn spawn_all<S: PieceSpawner>(board: &ChessBoard, spawner: &mut S) -> Vec<S::Handle> {
    board
        .pieces()
        .map(|(id, actor)| spawner.spawn_piece(actor.kind, actor.team, id, actor.position))
        .collect()
}

/// Container for piece mesh handles
#[derive(Resource, Debug, Clone)]
pub struct PieceMeshes {
    pub base: Handle<Mesh>,
    pub pawn_head: Handle<Mesh>,
    pub rook_body: Handle<Mesh>,
    pub knight_head: Handle<Mesh>,
    pub bishop_body: Handle<Mesh>,
    pub queen_body: Handle<Mesh>,
    pub crown: Handle<Mesh>,
    pub king_cross: Handle<Mesh>,
}

impl FromWorld for PieceMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        PieceMeshes {
            base: meshes.add(Cylinder::new(0.3, 0.1)),
            pawn_head: meshes.add(Sphere::new(0.17)),
            rook_body: meshes.add(Cylinder::new(0.22, 0.5)),
            knight_head: meshes.add(Cuboid::new(0.18, 0.42, 0.34)),
            bishop_body: meshes.add(Cone {
                radius: 0.2,
                height: 0.6,
            }),
            queen_body: meshes.add(Cylinder::new(0.2, 0.65)),
            crown: meshes.add(Sphere::new(0.12)),
            king_cross: meshes.add(Cuboid::new(0.08, 0.24, 0.08)),
        }
    }
}

/// Per-team material handles, shared by every piece of that team
#[derive(Resource, Debug, Clone)]
pub struct PieceMaterials {
    pub white: Handle<StandardMaterial>,
    pub black: Handle<StandardMaterial>,
}

impl FromWorld for PieceMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        PieceMaterials {
            white: materials.add(StandardMaterial {
                base_color: Color::srgb(0.92, 0.9, 0.85),
                perceptual_roughness: 0.4,
                ..default()
            }),
            black: materials.add(StandardMaterial {
                base_color: Color::srgb(0.12, 0.12, 0.14),
                perceptual_roughness: 0.4,
                ..default()
            }),
        }
    }
}

impl PieceMaterials {
    pub fn for_team(&self, team: PieceColor) -> Handle<StandardMaterial> {
        match team {
            PieceColor::White => self.white.clone(),
            PieceColor::Black => self.black.clone(),
        }
    }
}

/// Get rotation for piece based on color - black pieces face opposite direction
fn piece_rotation(color: PieceColor) -> Quat {
    match color {
        PieceColor::White => Quat::IDENTITY,
        PieceColor::Black => Quat::from_rotation_y(std::f32::consts::PI),
    }
}

/// Mesh parts of a piece as `(mesh, offset from the root)`
///
/// The root sits on the tile surface, so every offset is at least half the
/// part's own height.
fn piece_parts(meshes: &PieceMeshes, kind: PieceType) -> Vec<(Handle<Mesh>, Vec3)> {
    let base = (meshes.base.clone(), Vec3::Y * 0.05);
    match kind {
        PieceType::Pawn => vec![base, (meshes.pawn_head.clone(), Vec3::Y * 0.27)],
        PieceType::Rook => vec![base, (meshes.rook_body.clone(), Vec3::Y * 0.35)],
        PieceType::Knight => vec![
            base,
            (meshes.rook_body.clone(), Vec3::Y * 0.3),
            (meshes.knight_head.clone(), Vec3::new(0.0, 0.6, 0.06)),
        ],
        PieceType::Bishop => vec![
            base,
            (meshes.bishop_body.clone(), Vec3::Y * 0.4),
            (meshes.crown.clone(), Vec3::Y * 0.72),
        ],
        PieceType::Queen => vec![
            base,
            (meshes.queen_body.clone(), Vec3::Y * 0.425),
            (meshes.crown.clone(), Vec3::Y * 0.82),
        ],
        PieceType::King => vec![
            base,
            (meshes.queen_body.clone(), Vec3::Y * 0.425),
            (meshes.crown.clone(), Vec3::Y * 0.82),
            (meshes.king_cross.clone(), Vec3::Y * 1.0),
        ],
    }
}

/// [`PieceSpawner`] that spawns entities through [`Commands`]
pub struct CommandsPieceSpawner<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a PieceMeshes,
    pub materials: &'a PieceMaterials,
}

impl PieceSpawner for CommandsPieceSpawner<'_, '_, '_> {
    type Handle = Entity;

    fn spawn_piece(
        &mut self,
        kind: PieceType,
        team: PieceColor,
        id: PieceId,
        position: Vec3,
    ) -> Entity {
        let material = self.materials.for_team(team);
        let parts = piece_parts(self.meshes, kind);

        self.commands
            .spawn((
                Transform::from_translation(position).with_rotation(piece_rotation(team)),
                Visibility::Inherited,
                PieceHandle(id),
                Name::new(format!("{:?} {}", team, kind.name())),
            ))
            .with_children(|parent| {
                for (mesh, offset) in parts {
                    parent.spawn((
                        Mesh3d(mesh),
                        MeshMaterial3d(material.clone()),
                        Transform::from_translation(offset),
                    ));
                }
            })
            .id()
    }
}

/// Spawn the piece visuals once the board resource exists
pub fn create_pieces(
    mut commands: Commands,
    board: Res<ChessBoard>,
    meshes: Res<PieceMeshes>,
    materials: Res<PieceMaterials>,
) {
    let mut spawner = CommandsPieceSpawner {
        commands: &mut commands,
        meshes: &meshes,
        materials: &materials,
    };
    let spawned = spawn_all(&board, &mut spawner);
    info!("[PIECES] Spawned {} pieces", spawned.len());
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PieceMeshes>()
            .init_resource::<PieceMaterials>()
            .add_systems(OnEnter(GameState::Setup), create_pieces.after(setup_board));
    }
}
