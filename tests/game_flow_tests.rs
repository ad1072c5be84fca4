//! Game Flow Integration Tests
//!
//! Runs the real plugins headless (no window, no renderer) and drives them
//! by writing the per-frame `PointerInput` sample directly:
//! - Setup builds the board and hands over to InGame
//! - Drops onto empty, friendly and enemy tiles
//! - Move history, capture tally and `MoveAttempted` messages
//! - Easing toward targets over simulated frames, mirrored onto `Transform`s

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use chessboard3d::core::{CorePlugin, GameState};
use chessboard3d::game::components::PieceHandle;
use chessboard3d::game::events::MoveAttempted;
use chessboard3d::game::interaction::{InteractionMachine, InteractionState, PointerInput};
use chessboard3d::game::resources::{CapturedPieces, MoveHistory};
use chessboard3d::game::rules::{ChessBoard, CAPTURED_SCALE};
use chessboard3d::game::system_sets::GameSystems;
use chessboard3d::game::types::{Cell, PieceColor, PieceType};
use chessboard3d::game::GamePlugin;
use chessboard3d::input::{GridGeometry, PlaneGridGeometry, TileHighlight};
use std::time::Duration;

/// Every `MoveAttempted` seen so far
#[derive(Resource, Default)]
struct Attempts(Vec<MoveAttempted>);

fn collect_attempts(mut reader: MessageReader<MoveAttempted>, mut seen: ResMut<Attempts>) {
    seen.0.extend(reader.read().copied());
}

fn cell(x: u8, y: u8) -> Cell {
    Cell::new(x, y).unwrap()
}

/// Headless app already in `InGame`
fn game_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins((CorePlugin, GamePlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)))
        .init_resource::<Attempts>()
        .add_systems(Update, collect_attempts.after(GameSystems::Interaction));

    // Setup is entered and the board built, then the next frame enters InGame
    app.update();
    app.update();
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::InGame
    );
    app
}

fn ray_at(app: &App, cell: Cell) -> Ray3d {
    let center = app.world().resource::<ChessBoard>().cell_center(cell);
    Ray3d::new(center + Vec3::Y * 10.0, Dir3::NEG_Y)
}

fn send(app: &mut App, ray: Option<Ray3d>, pressed: bool, released: bool) {
    app.insert_resource(PointerInput {
        ray,
        pressed,
        released,
    });
    app.update();
}

/// Hover `from`, press, move to `to`, release
fn drag(app: &mut App, from: Cell, to: Cell) {
    let start = ray_at(app, from);
    let end = ray_at(app, to);
    send(app, Some(start), false, false);
    send(app, Some(start), true, false);
    send(app, Some(end), false, false);
    send(app, Some(end), false, true);
}

fn board(app: &App) -> &ChessBoard {
    app.world().resource::<ChessBoard>()
}

// ============================================================================
// Setup Tests
// ============================================================================

#[test]
fn test_setup_builds_standard_board() {
    let app = game_app();
    let board = board(&app);

    assert_eq!(board.piece_count(), 32);
    assert_eq!(board.occupied().count(), 32);
    assert!(board.is_consistent());
    assert!(app.world().contains_resource::<PlaneGridGeometry>());
    assert_eq!(
        app.world().resource::<InteractionMachine>().state(),
        InteractionState::Idle
    );
    assert!(app.world().resource::<MoveHistory>().is_empty());
}

#[test]
fn test_setup_uses_inserted_settings() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(chessboard3d::core::BoardSettings {
            tile_size: 2.0,
            ..Default::default()
        })
        .add_plugins((CorePlugin, GamePlugin));
    app.update();

    let board = app.world().resource::<ChessBoard>();
    assert_eq!(board.geometry().tile_size, 2.0);
    let a1 = board.cell_center(cell(0, 0));
    let b1 = board.cell_center(cell(1, 0));
    assert_eq!(b1.x - a1.x, 2.0);
}

// ============================================================================
// Drop Tests
// ============================================================================

#[test]
fn test_pawn_drop_on_empty_tile() {
    let mut app = game_app();
    drag(&mut app, cell(0, 1), cell(0, 2));

    let board = board(&app);
    assert_eq!(board.piece_at(0, 1), None);
    let pawn = board.piece_at(0, 2).expect("pawn moved");
    let actor = board.piece(pawn).unwrap();
    assert_eq!(actor.kind, PieceType::Pawn);
    assert_eq!(actor.cell, cell(0, 2));
    assert_eq!(actor.target_position(), board.cell_center(cell(0, 2)));

    let history = app.world().resource::<MoveHistory>();
    assert_eq!(history.len(), 1);
    let record = history.last_move().unwrap();
    assert_eq!((record.from, record.to), (cell(0, 1), cell(0, 2)));
    assert_eq!(record.team, PieceColor::White);
    assert_eq!(record.captured, None);

    let attempts = &app.world().resource::<Attempts>().0;
    assert_eq!(attempts.len(), 1);
    assert!(attempts[0].accepted);
    assert_eq!(attempts[0].to, Some(cell(0, 2)));
}

#[test]
fn test_drop_on_friendly_piece_is_refused() {
    let mut app = game_app();
    let rook = board(&app).piece_at(0, 0).unwrap();
    let knight = board(&app).piece_at(1, 0).unwrap();

    drag(&mut app, cell(0, 0), cell(1, 0));

    let board = board(&app);
    assert_eq!(board.piece_at(0, 0), Some(rook));
    assert_eq!(board.piece_at(1, 0), Some(knight));
    assert_eq!(board.piece(rook).unwrap().cell, cell(0, 0));
    assert_eq!(
        board.piece(rook).unwrap().target_position(),
        board.cell_center(cell(0, 0))
    );
    assert!(app.world().resource::<MoveHistory>().is_empty());

    let attempts = &app.world().resource::<Attempts>().0;
    assert_eq!(attempts.len(), 1);
    assert!(!attempts[0].accepted);
    assert_eq!(attempts[0].to, Some(cell(1, 0)));
}

#[test]
fn test_drop_on_enemy_captures_it() {
    let mut app = game_app();
    let black_pawn = board(&app).piece_at(0, 6).unwrap();

    drag(&mut app, cell(0, 1), cell(0, 6));

    let board = board(&app);
    let victim = board.piece(black_pawn).unwrap();
    assert!(victim.captured);
    assert_eq!(victim.target_scale(), Vec3::splat(CAPTURED_SCALE));
    assert_ne!(board.piece_at(0, 6), Some(black_pawn));
    assert_eq!(board.piece_count(), 32);
    assert_eq!(board.captured_count(PieceColor::Black), 1);
    assert!(board.is_consistent());

    let captured = app.world().resource::<CapturedPieces>();
    assert_eq!(captured.taken_by(PieceColor::White), &[PieceType::Pawn]);
    assert_eq!(captured.material_advantage(), 1);

    let history = app.world().resource::<MoveHistory>();
    assert_eq!(history.last_move().unwrap().captured, Some(PieceType::Pawn));
}

#[test]
fn test_release_off_board_returns_piece() {
    let mut app = game_app();
    let start = ray_at(&app, cell(3, 1));
    let off_board = Ray3d::new(Vec3::new(40.0, 10.0, 40.0), Dir3::NEG_Y);
    send(&mut app, Some(start), false, false);
    send(&mut app, Some(start), true, false);
    send(&mut app, Some(off_board), false, true);

    let board = board(&app);
    assert!(board.piece_at(3, 1).is_some());
    assert!(app.world().resource::<MoveHistory>().is_empty());
    let attempts = &app.world().resource::<Attempts>().0;
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].to, None);
    assert_eq!(
        app.world().resource::<InteractionMachine>().state(),
        InteractionState::Idle
    );
}

#[test]
fn test_press_edge_is_consumed() {
    let mut app = game_app();
    let start = ray_at(&app, cell(4, 1));
    send(&mut app, Some(start), true, false);

    let pointer = *app.world().resource::<PointerInput>();
    assert!(!pointer.pressed);
    assert_eq!(pointer.ray, Some(start));
    assert!(matches!(
        app.world().resource::<InteractionMachine>().state(),
        InteractionState::Dragging { .. }
    ));

    // Holding still does not start a second drag or drop anything
    app.update();
    assert!(app.world().resource::<Attempts>().0.is_empty());
}

// ============================================================================
// Hover and Easing Tests
// ============================================================================

#[test]
fn test_hover_highlights_single_tile() {
    let mut app = game_app();
    let ray = ray_at(&app, cell(2, 3));
    send(&mut app, Some(ray), false, false);
    let ray = ray_at(&app, cell(5, 4));
    send(&mut app, Some(ray), false, false);

    let grid = app.world().resource::<PlaneGridGeometry>();
    assert_eq!(grid.highlight(cell(5, 4)), TileHighlight::Hovered);
    assert_eq!(grid.highlight(cell(2, 3)), TileHighlight::Normal);
    assert_eq!(grid.cells_with(TileHighlight::Hovered).count(), 1);

    send(&mut app, None, false, false);
    let grid = app.world().resource::<PlaneGridGeometry>();
    assert_eq!(grid.cells_with(TileHighlight::Hovered).count(), 0);
}

#[test]
fn test_moved_piece_eases_into_place() {
    let mut app = game_app();
    drag(&mut app, cell(6, 0), cell(5, 2));
    let knight = board(&app).piece_at(5, 2).unwrap();
    assert!(!board(&app).piece(knight).unwrap().is_settled());

    for _ in 0..60 {
        app.update();
    }

    let board = board(&app);
    let actor = board.piece(knight).unwrap();
    assert!(actor.is_settled());
    assert!(actor
        .position
        .abs_diff_eq(board.cell_center(cell(5, 2)), 1e-3));
}

#[test]
fn test_piece_transforms_track_eased_actors() {
    let mut app = game_app();
    let pawn = board(&app).piece_at(3, 1).unwrap();
    let victim = board(&app).piece_at(3, 6).unwrap();
    let rook = board(&app).piece_at(0, 0).unwrap();
    let mut spawn = |id| {
        app.world_mut()
            .spawn((PieceHandle(id), Transform::default()))
            .id()
    };
    let (pawn_entity, victim_entity, rook_entity) = (spawn(pawn), spawn(victim), spawn(rook));

    drag(&mut app, cell(3, 1), cell(3, 6));
    for _ in 0..60 {
        app.update();
    }

    let transform = |entity| *app.world().get::<Transform>(entity).unwrap();
    let board = board(&app);
    assert!(board.is_settled());

    assert_eq!(
        transform(pawn_entity).translation,
        board.cell_center(cell(3, 6))
    );
    assert_eq!(transform(pawn_entity).scale, Vec3::ONE);

    let taken = board.piece(victim).unwrap();
    assert_eq!(transform(victim_entity).translation, taken.target_position());
    assert!(transform(victim_entity)
        .scale
        .abs_diff_eq(Vec3::splat(CAPTURED_SCALE), 1e-3));

    // Untouched pieces are written too, from their own actor
    assert_eq!(
        transform(rook_entity).translation,
        board.cell_center(cell(0, 0))
    );
}

#[test]
fn test_settled_board_leaves_transforms_alone() {
    let mut app = game_app();
    let knight = board(&app).piece_at(6, 0).unwrap();
    let entity = app
        .world_mut()
        .spawn((PieceHandle(knight), Transform::default()))
        .id();

    drag(&mut app, cell(6, 0), cell(5, 2));
    for _ in 0..60 {
        app.update();
    }
    let center = board(&app).cell_center(cell(5, 2));
    assert_eq!(app.world().get::<Transform>(entity).unwrap().translation, center);

    // Idle frames change nothing on the board, so the sync does not rewrite
    app.world_mut().get_mut::<Transform>(entity).unwrap().translation = Vec3::ZERO;
    let ray = ray_at(&app, cell(5, 2));
    send(&mut app, Some(ray), false, false);
    app.update();
    assert_eq!(
        app.world().get::<Transform>(entity).unwrap().translation,
        Vec3::ZERO
    );

    // The next accepted drop flags the board and the entity catches up again
    drag(&mut app, cell(5, 2), cell(5, 3));
    assert_ne!(
        app.world().get::<Transform>(entity).unwrap().translation,
        Vec3::ZERO
    );
}
