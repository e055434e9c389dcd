//! Match detector and swap validator tests

use cube_match3::core::matching::{
    available_moves, check_for_available_moves, check_for_match_ids, check_for_matches,
    for_each_match, matched_points, maximal_runs, runs_through,
};
use cube_match3::core::{
    Board, HeadlessSurface, MatchEvent, NullDelegate, SwapRejection, SwapRule,
};
use cube_match3::types::{Face, GridPoint, Orientation, Piece};

fn board(text: &str) -> Board {
    Board::from_debug_map(Face::A, text).unwrap()
}

#[test]
fn test_run_of_three_then_empties() {
    let b = board(
        "
        DDD......
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        ",
    );
    let events = check_for_matches(&b);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        MatchEvent {
            length: 3,
            piece: Piece::Piece4,
            anchor: GridPoint::new(0, 0),
            orientation: Orientation::Horizontal,
        }
    );
}

#[test]
fn test_run_of_five_reports_overlapping_lengths() {
    let b = board(
        "
        .....
        .....
        EEEEE
        .....
        .....
        ",
    );
    let anchored: Vec<usize> = check_for_matches(&b)
        .iter()
        .filter(|e| e.anchor == GridPoint::new(0, 2))
        .map(|e| e.length)
        .collect();
    assert_eq!(anchored, vec![5, 4, 3]);
    assert_eq!(matched_points(&check_for_matches(&b)).len(), 5);
}

#[test]
fn test_incremental_scan_matches_collected_scan() {
    let b = board(
        "
        AAAB
        C..B
        C..B
        C.ZZ
        ",
    );
    let mut seen = Vec::new();
    for_each_match(&b, |e| seen.push(e));
    assert_eq!(seen, check_for_matches(&b));

    let runs = maximal_runs(&seen);
    assert_eq!(runs.len(), 3);
    assert!(runs.iter().all(|e| e.length == 3));
}

#[test]
fn test_blocks_can_form_runs() {
    let b = board(
        "
        ZZZ
        ...
        ...
        ",
    );
    let events = check_for_matches(&b);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].piece, Piece::Block);
}

#[test]
fn test_match_ids_need_visual_nodes() {
    let b = board(
        "
        AAA
        ...
        ...
        ",
    );
    let err = check_for_match_ids(&b, &NullDelegate).unwrap_err();
    assert!(err.is_fatal());

    let mut surface = HeadlessSurface::new();
    surface.mirror_board(&b);
    let ids = check_for_match_ids(&b, &surface).unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].len(), 3);
}

#[test]
fn test_runs_through_checks_both_axes() {
    let b = board(
        "
        A..
        A..
        ABB
        ",
    );
    assert!(runs_through(&b, GridPoint::new(0, 1)));
    assert!(!runs_through(&b, GridPoint::new(1, 2)));
    assert!(!runs_through(&b, GridPoint::new(2, 0)));
}

#[test]
fn test_can_swap_false_cases() {
    let mut b = board(
        "
        ABAB
        BABA
        ABAB
        BABA
        ",
    );
    for rule in [SwapRule::Disabled, SwapRule::Adjacent, SwapRule::MustCreateMatch] {
        b.rules_mut().swap_rule = rule;
        let p = GridPoint::new(1, 1);
        assert!(!b.can_swap_pieces(p, p));
        assert!(!b.can_swap_pieces(p, GridPoint::new(2, 2)));
        assert!(!b.can_swap_pieces(p, GridPoint::new(1, 3)));
        assert!(!b.can_swap_pieces(p, GridPoint::new(-1, 1)));
    }

    b.rules_mut().swap_rule = SwapRule::Disabled;
    assert!(!b.can_swap_pieces(GridPoint::new(0, 0), GridPoint::new(1, 0)));
}

#[test]
fn test_available_moves_on_a_stuck_board() {
    let b = board(
        "
        ABCD
        CDAB
        ABCD
        CDAB
        ",
    );
    assert!(available_moves(&b).is_empty());
    assert!(!check_for_available_moves(&b));
}

#[test]
fn test_every_available_move_is_a_legal_swap() {
    let mut b = board(
        "
        AABCD
        CDAEB
        BEDCA
        DACBE
        EBDAC
        ",
    );
    b.rules_mut().swap_rule = SwapRule::MustCreateMatch;
    let moves = available_moves(&b);
    assert_eq!(moves, vec![(GridPoint::new(2, 0), GridPoint::new(2, 1))]);
    for (p, q) in moves {
        assert_eq!(b.check_swap(p, q), Ok(()));
        let mut after = b.clone();
        assert!(after.try_swap_pieces(p, q));
        assert!(!check_for_matches(&after).is_empty());
    }
    assert_eq!(
        b.check_swap(GridPoint::new(4, 4), GridPoint::new(4, 3)),
        Err(SwapRejection::NoMatch)
    );
}
