//! Collapse module - packing pieces toward the gravity edges
//!
//! A face is cut into lanes that run perpendicular to a gravity edge: columns
//! for `Top`/`Bottom`, rows for `Left`/`Right`. Depth 0 of a lane is the cell on
//! the gravity edge. Each non-empty cell falls by the number of `Empty` cells
//! between it and the edge.
//!
//! With several gravity edges every cell belongs to the one nearest to it
//! ([`RuleSet::nearest_gravity_edge`]). A lane is only followed while its cells
//! still belong to the lane's edge, so pieces never cross into another edge's
//! region.
//!
//! The visual drop list and the logical move are computed in two separate passes
//! and never share state; both derive the same distance from the same grid.
//!
//! [`RuleSet::nearest_gravity_edge`]: crate::rules::RuleSet::nearest_gravity_edge

use crate::board::Board;
use crate::delegate::{DropRecord, VisualDelegate};
use crate::diag::diag_note;
use crate::error::EngineError;
use crate::rules::OldPieceSink;
use crate::types::{Edge, GridPoint, Piece};

/// Grid point at `depth` cells in from `gravity` on the given lane
fn lane_point(extent: usize, gravity: Edge, lane: usize, depth: usize) -> GridPoint {
    let (lane, depth, last) = (lane as i32, depth as i32, extent as i32 - 1);
    match gravity {
        Edge::Bottom => GridPoint::new(lane, last - depth),
        Edge::Top => GridPoint::new(lane, depth),
        Edge::Left => GridPoint::new(depth, lane),
        Edge::Right => GridPoint::new(last - depth, lane),
    }
}

fn landing(from: GridPoint, distance: usize, gravity: Edge) -> GridPoint {
    let d = distance as i32;
    match gravity {
        Edge::Bottom => from.offset(0, d),
        Edge::Top => from.offset(0, -d),
        Edge::Left => from.offset(-d, 0),
        Edge::Right => from.offset(d, 0),
    }
}

impl Board {
    /// Gravity edge the piece at `at` falls toward
    pub fn gravity_at(&self, at: GridPoint) -> Edge {
        self.rules().nearest_gravity_edge(at, self.extent())
    }

    /// Visit every cell lane by lane, gravity edge first, with the count of
    /// `Empty` cells already passed in that lane and the edge it falls toward.
    ///
    /// Edges are taken in configured order.
    fn scan_lanes(&self, mut visit: impl FnMut(GridPoint, Piece, usize, Edge)) {
        let extent = self.extent();
        for &gravity in self.rules().gravity() {
            for lane in 0..extent {
                let mut empties = 0;
                for depth in 0..extent {
                    let at = lane_point(extent, gravity, lane, depth);
                    if self.gravity_at(at) != gravity {
                        break;
                    }
                    let piece = self[at];
                    if piece == Piece::Empty {
                        empties += 1;
                    } else {
                        visit(at, piece, empties, gravity);
                    }
                }
            }
        }
    }

    /// Drop record for every non-empty cell backed by a visual node.
    ///
    /// Records with distance 0 are included. Cells without a node are skipped.
    pub fn make_drop_list(&self, delegate: &dyn VisualDelegate) -> Vec<DropRecord> {
        let face = self.face();
        let mut list = Vec::new();
        self.scan_lanes(|at, _, distance, _| match delegate.try_visual_node_id(at, face) {
            Some(id) => list.push(DropRecord {
                from: at,
                distance,
                id,
            }),
            None => diag_note!("board", "no visual node at {} on face {}", at, face),
        });
        list
    }

    /// Cells that have to fall, with their distance, gravity edge first
    pub fn drop_distances(&self) -> Vec<(GridPoint, usize)> {
        let mut out = Vec::new();
        self.scan_lanes(|at, _, distance, _| {
            if distance > 0 {
                out.push((at, distance));
            }
        });
        out
    }

    /// Distance recorded for `at` in a drop list, 0 if it is not listed
    pub fn drop_in(list: &[DropRecord], at: GridPoint) -> usize {
        list.iter()
            .find(|record| record.from == at)
            .map_or(0, |record| record.distance)
    }

    /// Collapse the face toward its gravity edges.
    ///
    /// The delegate is asked to animate the records with a non-zero distance,
    /// once per gravity edge that has any; all of them are also returned. The
    /// grid is then updated from an independent pass.
    pub fn drop_pieces(
        &mut self,
        delegate: &mut dyn VisualDelegate,
    ) -> Result<Vec<DropRecord>, EngineError> {
        match self.rules().old_piece_sink {
            OldPieceSink::Stationary => return Ok(Vec::new()),
            OldPieceSink::ToAdjacentBottomFace => {
                return Err(EngineError::Unsupported(
                    "sinking pieces onto the adjacent bottom face",
                ))
            }
            OldPieceSink::LogicalBottom => {}
        }

        let moves: Vec<DropRecord> = self
            .make_drop_list(delegate)
            .into_iter()
            .filter(|record| record.distance > 0)
            .collect();
        let face = self.face();
        for &gravity in self.rules().gravity() {
            let batch: Vec<DropRecord> = moves
                .iter()
                .filter(|record| self.gravity_at(record.from) == gravity)
                .copied()
                .collect();
            if !batch.is_empty() {
                delegate.move_pieces(&batch, face, gravity);
            }
        }

        let mut falls = Vec::new();
        self.scan_lanes(|at, _, distance, gravity| {
            if distance > 0 {
                falls.push((at, distance, gravity));
            }
        });
        for (from, distance, gravity) in falls {
            debug_assert!(moves
                .iter()
                .all(|record| record.from != from || record.distance == distance));
            let to = landing(from, distance, gravity);
            self[to] = self[from];
            self[from] = Piece::Empty;
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::delegate::{NodeId, VisualNode};
    use crate::types::Face;

    /// Node for every listed point, recording move requests
    #[derive(Default)]
    struct Nodes {
        at: BTreeMap<GridPoint, NodeId>,
        moved: Vec<(Vec<DropRecord>, Edge)>,
    }

    impl Nodes {
        fn mirror(board: &Board) -> Self {
            let at = board
                .points()
                .filter(|p| board[*p] != Piece::Empty)
                .enumerate()
                .map(|(i, p)| (p, NodeId(i as u64)))
                .collect();
            Self {
                at,
                moved: Vec::new(),
            }
        }
    }

    impl VisualDelegate for Nodes {
        fn visual_node(&self, at: GridPoint, face: Face) -> Option<VisualNode> {
            self.at.get(&at).map(|id| VisualNode {
                id: *id,
                face,
                at,
                piece: Piece::Piece1,
            })
        }

        fn move_pieces(&mut self, moves: &[DropRecord], _face: Face, gravity: Edge) {
            self.moved.push((moves.to_vec(), gravity));
        }

        fn remove_nodes(&mut self, _ids: &[NodeId], _face: Face) {}

        fn add_new_piece(&mut self, _piece: Piece, _at: GridPoint, _face: Face) {}

        fn remove_node_at(&mut self, _at: GridPoint, _face: Face) {}

        fn update_plane(&mut self, _face: Face) {}
    }

    fn board(text: &str) -> Board {
        Board::from_debug_map(Face::A, text).unwrap()
    }

    #[test]
    fn drop_list_counts_gaps_below_each_piece() {
        // Column 0 from the bottom edge: B, Empty, A, Empty, Empty.
        let b = board(
            "
            .....
            .....
            A....
            .....
            B....
            ",
        );
        let list = b.make_drop_list(&Nodes::mirror(&b));
        assert_eq!(list.len(), 2);
        assert_eq!(Board::drop_in(&list, GridPoint::new(0, 4)), 0);
        assert_eq!(Board::drop_in(&list, GridPoint::new(0, 2)), 1);
        assert_eq!(Board::drop_in(&list, GridPoint::new(3, 3)), 0);
    }

    #[test]
    fn drop_pieces_packs_without_reordering() {
        let mut b = board(
            "
            C..
            .A.
            B..
            ",
        );
        let mut nodes = Nodes::mirror(&b);
        let moves = b.drop_pieces(&mut nodes).unwrap();
        assert_eq!(b.debug_map(), "...\nC..\nBA.\n");
        assert_eq!(moves.len(), 2);
        assert_eq!(nodes.moved.len(), 1);
        assert_eq!(nodes.moved[0].1, Edge::Bottom);
        for record in &moves {
            assert!(b[record.destination(Edge::Bottom)] != Piece::Empty);
        }
    }

    #[test]
    fn logical_pass_runs_without_visual_nodes() {
        let mut b = board(
            "
            A.
            ..
            ",
        );
        let moves = b.drop_pieces(&mut crate::delegate::NullDelegate).unwrap();
        assert!(moves.is_empty());
        assert_eq!(b.debug_map(), "..\nA.\n");
    }

    #[test]
    fn sideways_gravity_packs_rows() {
        let mut b = board(
            "
            .A.B
            ....
            C...
            ...D
            ",
        );
        b.rules_mut().set_gravity(&[Edge::Right]).unwrap();
        let mut nodes = Nodes::mirror(&b);
        b.drop_pieces(&mut nodes).unwrap();
        assert_eq!(b.debug_map(), "..AB\n....\n...C\n...D\n");
    }

    #[test]
    fn opposite_gravity_edges_split_each_lane() {
        let mut b = board(
            "
            .A.
            ...
            .B.
            ",
        );
        b.rules_mut().set_gravity(&[Edge::Bottom, Edge::Top]).unwrap();
        let mut nodes = Nodes::mirror(&b);
        let moves = b.drop_pieces(&mut nodes).unwrap();
        // Row 1 is a tie and goes to Bottom, listed first.
        assert!(moves.is_empty());
        assert_eq!(b.debug_map(), ".A.\n...\n.B.\n");

        let mut b = board(
            "
            ....
            .A..
            .B..
            ....
            ",
        );
        b.rules_mut().set_gravity(&[Edge::Bottom, Edge::Top]).unwrap();
        let mut nodes = Nodes::mirror(&b);
        let moves = b.drop_pieces(&mut nodes).unwrap();
        assert_eq!(moves.len(), 2);
        assert_eq!(b.debug_map(), ".A..\n....\n....\n.B..\n");
        let edges: Vec<Edge> = nodes.moved.iter().map(|(_, edge)| *edge).collect();
        assert_eq!(edges, vec![Edge::Bottom, Edge::Top]);
        assert_eq!(b.gravity_at(GridPoint::new(1, 1)), Edge::Top);
    }

    #[test]
    fn sink_policy_controls_collapse() {
        let mut b = board(
            "
            A.
            ..
            ",
        );
        b.rules_mut().old_piece_sink = OldPieceSink::Stationary;
        assert!(b.drop_pieces(&mut Nodes::default()).unwrap().is_empty());
        assert_eq!(b.debug_map(), "A.\n..\n");

        b.rules_mut().old_piece_sink = OldPieceSink::ToAdjacentBottomFace;
        let err = b.drop_pieces(&mut Nodes::default()).unwrap_err();
        assert_eq!(err.code(), "unsupported");
    }
}
