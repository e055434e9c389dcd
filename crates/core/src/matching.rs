//! Match detector - runs of identical pieces
//!
//! Every non-empty cell is tested, in row-major order, against six fixed run
//! conditions: horizontal 5, 4, 3 then vertical 5, 4, 3, each starting at that
//! cell. The conditions are independent, so one physical run of five produces
//! three events at its first cell (5, 4 and 3) plus shorter events anchored at the
//! following cells. Callers that only want the longest run use [`maximal_runs`].
//!
//! Runs never wrap onto a neighboring face.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::delegate::{NodeId, VisualDelegate};
use crate::error::EngineError;
use crate::types::{GridPoint, Orientation, Piece, MAX_RUN, MIN_RUN};

/// One satisfied run condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchEvent {
    pub length: usize,
    pub piece: Piece,
    pub anchor: GridPoint,
    pub orientation: Orientation,
}

impl MatchEvent {
    /// Cells covered by the run, starting at the anchor
    pub fn points(&self) -> impl Iterator<Item = GridPoint> {
        let (dx, dy) = self.orientation.step();
        let anchor = self.anchor;
        (0..self.length as i32).map(move |i| anchor.offset(dx * i, dy * i))
    }

    /// True if `other` lies on the same line, with the same piece, inside this run
    pub fn contains(&self, other: &MatchEvent) -> bool {
        self.piece == other.piece
            && self.orientation == other.orientation
            && self.length >= other.length
            && other.points().all(|p| self.points().any(|q| q == p))
    }
}

/// Visual ids of the cells of one run
pub type MatchIds = ArrayVec<NodeId, MAX_RUN>;

/// Check conditions in the fixed order, longest first
const RUN_CHECKS: [(Orientation, usize); 6] = [
    (Orientation::Horizontal, 5),
    (Orientation::Horizontal, 4),
    (Orientation::Horizontal, 3),
    (Orientation::Vertical, 5),
    (Orientation::Vertical, 4),
    (Orientation::Vertical, 3),
];

fn run_holds(
    board: &Board,
    anchor: GridPoint,
    piece: Piece,
    orientation: Orientation,
    length: usize,
) -> bool {
    let extent = board.extent() as i32;
    let along = match orientation {
        Orientation::Horizontal => anchor.x,
        Orientation::Vertical => anchor.y,
    };
    // Bound the scan so the run never reads past the face edge.
    if along > extent - length as i32 {
        return false;
    }
    let (dx, dy) = orientation.step();
    (1..length as i32).all(|i| board[anchor.offset(dx * i, dy * i)] == piece)
}

/// Visit every satisfied run condition in scan order
pub fn for_each_match(board: &Board, mut on_match: impl FnMut(MatchEvent)) {
    for anchor in board.points() {
        let piece = board[anchor];
        if piece == Piece::Empty {
            continue;
        }
        for (orientation, length) in RUN_CHECKS {
            if run_holds(board, anchor, piece, orientation, length) {
                on_match(MatchEvent {
                    length,
                    piece,
                    anchor,
                    orientation,
                });
            }
        }
    }
}

/// All satisfied run conditions, overlapping reports included
pub fn check_for_matches(board: &Board) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    for_each_match(board, |event| events.push(event));
    events
}

/// Same scan as [`check_for_matches`], reporting the visual ids of each run.
///
/// Every matched cell must have a visual node; a missing one is fatal.
pub fn check_for_match_ids(
    board: &Board,
    delegate: &dyn VisualDelegate,
) -> Result<Vec<MatchIds>, EngineError> {
    let mut out = Vec::new();
    for event in check_for_matches(board) {
        let mut ids = MatchIds::new();
        for p in event.points() {
            ids.push(delegate.visual_node_id(p, board.face())?);
        }
        out.push(ids);
    }
    Ok(out)
}

/// Distinct cells covered by any event, in row-major order
pub fn matched_points(events: &[MatchEvent]) -> Vec<GridPoint> {
    let mut points: Vec<GridPoint> = events.iter().flat_map(|e| e.points()).collect();
    points.sort_by_key(|p| (p.y, p.x));
    points.dedup();
    points
}

/// Events not contained in a longer event of the same line and piece
pub fn maximal_runs(events: &[MatchEvent]) -> Vec<MatchEvent> {
    events
        .iter()
        .filter(|e| {
            !events
                .iter()
                .any(|other| other.length > e.length && other.contains(e))
        })
        .copied()
        .collect()
}

/// Length of the line of identical pieces through `p` along one axis
fn line_length(board: &Board, p: GridPoint, piece: Piece, orientation: Orientation) -> usize {
    let (dx, dy) = orientation.step();
    let mut length = 1;
    for sign in [1, -1] {
        let mut q = p.offset(dx * sign, dy * sign);
        while board.get(q) == Some(piece) {
            length += 1;
            q = q.offset(dx * sign, dy * sign);
        }
    }
    length
}

/// True if a run of at least three passes through `p`
pub fn runs_through(board: &Board, p: GridPoint) -> bool {
    let piece = match board.get(p) {
        Some(Piece::Empty) | None => return false,
        Some(piece) => piece,
    };
    [Orientation::Horizontal, Orientation::Vertical]
        .into_iter()
        .any(|o| line_length(board, p, piece, o) >= MIN_RUN)
}

/// True if exchanging `a` and `b` would put either cell into a run.
///
/// The board itself is left untouched.
pub fn swap_creates_match(board: &Board, a: GridPoint, b: GridPoint) -> bool {
    let (Some(pa), Some(pb)) = (board.get(a), board.get(b)) else {
        return false;
    };
    if pa == pb {
        return false;
    }
    let mut scratch = board.clone();
    scratch[a] = pb;
    scratch[b] = pa;
    runs_through(&scratch, a) || runs_through(&scratch, b)
}

/// Every adjacent pair of movable, differing pieces whose swap makes a run.
///
/// Each pair is listed once, as (cell, right neighbor) or (cell, lower neighbor).
pub fn available_moves(board: &Board) -> Vec<(GridPoint, GridPoint)> {
    let mut moves = Vec::new();
    for p in board.points() {
        if !board[p].is_movable() {
            continue;
        }
        for q in [p.offset(1, 0), p.offset(0, 1)] {
            let movable = board.get(q).map_or(false, Piece::is_movable);
            if movable && swap_creates_match(board, p, q) {
                moves.push((p, q));
            }
        }
    }
    moves
}

/// True if at least one swap would produce a run
pub fn check_for_available_moves(board: &Board) -> bool {
    !available_moves(board).is_empty()
}
