//! Cube session tests - deal, cascade, swap

use cube_match3::core::matching::{available_moves, check_for_matches};
use cube_match3::core::{
    Board, Cube, CubeConfig, HeadlessSurface, NewPieceSource, NullDelegate, SurfaceCall,
    SwapOutcome, SwapRejection, SwapRule,
};
use cube_match3::types::{Edge, Face, GridPoint, Piece};

fn config(seed: u32) -> CubeConfig {
    CubeConfig {
        extent: 6,
        seed,
        ..CubeConfig::default()
    }
}

fn mirrored(cube: &Cube) -> HeadlessSurface {
    let mut surface = HeadlessSurface::new();
    for board in cube.boards() {
        surface.mirror_board(board);
    }
    surface
}

#[test]
fn test_same_seed_same_cube() {
    let a = Cube::new(config(11)).unwrap();
    let b = Cube::new(config(11)).unwrap();
    let c = Cube::new(config(12)).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
    assert_ne!(a.snapshot(), c.snapshot());
}

#[test]
fn test_neighbor_follows_the_folding_table() {
    let cube = Cube::new(config(1)).unwrap();
    assert_eq!(cube.neighbor(Face::A, Edge::Top), (Face::B, Edge::Bottom));
    assert_eq!(cube.neighbor(Face::E, Edge::Right), (Face::D, Edge::Left));
}

#[test]
fn test_resolve_clears_a_planted_run() {
    let mut cube = Cube::new(config(3)).unwrap();
    {
        let board = cube.board_mut(Face::B);
        board.rules_mut().set_palette(&[Piece::Piece9]).unwrap();
        board.clear();
        board.replace_pieces(GridPoint::new(0, 5), Piece::Piece1, 3, true);
    }
    let mut surface = HeadlessSurface::new();
    surface.mirror_board(cube.board(Face::B));

    let report = cube.resolve(Face::B, &mut surface).unwrap();
    // Round one clears the planted run, then refill deals a single color and
    // every later round clears the whole face again.
    assert!(report.rounds >= 1);
    assert!(report.removed >= 3);
    assert!(report.truncated);
    assert_eq!(report.rounds, cube.config().max_cascade_rounds);
    assert!(surface.shows(cube.board(Face::B)));
}

#[test]
fn test_resolve_settles_and_notifies() {
    let mut cube = Cube::new(config(8)).unwrap();
    let mut surface = mirrored(&cube);
    for face in Face::ALL {
        let report = cube.resolve(face, &mut surface).unwrap();
        assert!(!report.truncated);
        assert!(check_for_matches(cube.board(face)).is_empty());
        assert!(surface.shows(cube.board(face)));
        let plane_updates = surface
            .take_calls()
            .into_iter()
            .filter(|call| matches!(call, SurfaceCall::UpdatePlane { .. }))
            .count();
        assert_eq!(plane_updates, usize::from(report.rounds > 0));
    }
}

#[test]
fn test_match_rule_swap_plays_through_the_surface() {
    let mut cube = Cube::new(config(21)).unwrap();
    let mut surface = mirrored(&cube);
    cube.resolve(Face::A, &mut surface).unwrap();
    cube.board_mut(Face::A).rules_mut().swap_rule = SwapRule::MustCreateMatch;

    let moves = available_moves(cube.board(Face::A));
    let Some(&(a, b)) = moves.first() else {
        return;
    };
    surface.take_calls();
    let outcome = cube.try_swap(Face::A, a, b, &mut surface).unwrap();
    match outcome {
        SwapOutcome::Swapped(report) => assert!(report.removed >= 3),
        SwapOutcome::Rejected(reason) => panic!("listed move rejected: {}", reason.message()),
    }
    assert!(surface.shows(cube.board(Face::A)));
    assert!(matches!(
        surface.calls().first(),
        Some(SurfaceCall::RemoveNodeAt { .. })
    ));
}

#[test]
fn test_swap_on_disabled_face_is_rejected() {
    let mut cube = Cube::new(config(4)).unwrap();
    let outcome = cube
        .try_swap(Face::F, GridPoint::new(2, 2), GridPoint::new(2, 3), &mut NullDelegate)
        .unwrap();
    assert_eq!(outcome, SwapOutcome::Rejected(SwapRejection::RuleDisabled));
    assert!(!outcome.is_swapped());
}

#[test]
fn test_refill_counts_and_reports_new_pieces() {
    let mut cube = Cube::new(config(5)).unwrap();
    cube.board_mut(Face::C).set(GridPoint::new(1, 1), Piece::Empty).unwrap();
    cube.board_mut(Face::C).set(GridPoint::new(4, 0), Piece::Empty).unwrap();
    let mut surface = HeadlessSurface::new();
    assert_eq!(cube.refill(Face::C, &mut surface).unwrap(), 2);
    assert_eq!(cube.board(Face::C).piece_count(Piece::Empty), 0);
    assert_eq!(surface.calls().len(), 2);

    cube.board_mut(Face::C).rules_mut().new_piece_source = NewPieceSource::FromTopAdjacentFace;
    assert_eq!(
        cube.refill(Face::C, &mut surface).unwrap_err().code(),
        "unsupported"
    );
}

#[test]
fn test_reset_restores_the_deal() {
    let mut cube = Cube::new(config(9)).unwrap();
    let dealt = cube.snapshot();
    cube.board_mut(Face::E).clear();
    cube.rng_mut().next_u32();
    cube.reset();
    assert_eq!(cube.snapshot(), dealt);
    assert!(cube.boards().all(|b: &Board| b.piece_count(Piece::Empty) == 0));
}

#[test]
fn test_faces_are_dealt_from_their_palette() {
    let narrow = CubeConfig {
        populate_limit: 1,
        ..config(4)
    };
    let cube = Cube::new(narrow).unwrap();
    for board in cube.boards() {
        assert_eq!(board.rules().palette(), &[Piece::Piece1, Piece::Piece2]);
        assert_eq!(
            board.piece_count(Piece::Piece1) + board.piece_count(Piece::Piece2),
            36
        );
    }

    let mut cube = Cube::new(config(5)).unwrap();
    cube.board_mut(Face::A)
        .rules_mut()
        .set_palette(&[Piece::Piece9])
        .unwrap();
    cube.reset();
    assert_eq!(cube.board(Face::A).piece_count(Piece::Piece9), 36);
    assert_eq!(cube.board(Face::B).piece_count(Piece::Piece9), 0);
}
