//! In-memory visual delegate.
//!
//! `HeadlessSurface` keeps one node per occupied cell, hands out fresh ids and
//! applies every request immediately. Each call is also recorded so tests can
//! check what the engine asked for.

use std::collections::BTreeMap;

use crate::board::Board;
use crate::delegate::{DropRecord, NodeId, VisualDelegate, VisualNode};
use crate::types::{Edge, Face, GridPoint, Piece};

/// One request received from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    MovePieces {
        face: Face,
        gravity: Edge,
        moves: Vec<DropRecord>,
    },
    RemoveNodes {
        face: Face,
        ids: Vec<NodeId>,
    },
    AddNewPiece {
        face: Face,
        at: GridPoint,
        piece: Piece,
    },
    RemoveNodeAt {
        face: Face,
        at: GridPoint,
    },
    UpdatePlane {
        face: Face,
    },
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    nodes: BTreeMap<(Face, GridPoint), VisualNode>,
    next_id: u64,
    calls: Vec<SurfaceCall>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn(&mut self, face: Face, at: GridPoint, piece: Piece) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            (face, at),
            VisualNode {
                id,
                face,
                at,
                piece,
            },
        );
        id
    }

    /// Replace every node of the board's face with one per non-empty cell.
    ///
    /// Not recorded as a call.
    pub fn mirror_board(&mut self, board: &Board) {
        let face = board.face();
        self.nodes.retain(|(f, _), _| *f != face);
        for at in board.points() {
            let piece = board[at];
            if piece != Piece::Empty {
                self.spawn(face, at, piece);
            }
        }
    }

    pub fn node_at(&self, face: Face, at: GridPoint) -> Option<&VisualNode> {
        self.nodes.get(&(face, at))
    }

    pub fn node_count(&self, face: Face) -> usize {
        self.nodes.keys().filter(|(f, _)| *f == face).count()
    }

    /// True if the nodes of the board's face show exactly its pieces
    pub fn shows(&self, board: &Board) -> bool {
        let face = board.face();
        board.points().all(|at| {
            match (board[at], self.node_at(face, at)) {
                (Piece::Empty, None) => true,
                (piece, Some(node)) => node.piece == piece,
                _ => false,
            }
        })
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }
}

impl VisualDelegate for HeadlessSurface {
    fn visual_node(&self, at: GridPoint, face: Face) -> Option<VisualNode> {
        self.node_at(face, at).copied()
    }

    fn move_pieces(&mut self, moves: &[DropRecord], face: Face, gravity: Edge) {
        self.calls.push(SurfaceCall::MovePieces {
            face,
            gravity,
            moves: moves.to_vec(),
        });
        // Lift every moving node first so landing spots never collide with
        // nodes that have not moved yet.
        let mut lifted = Vec::with_capacity(moves.len());
        for record in moves {
            match self.nodes.get(&(face, record.from)) {
                Some(node) if node.id == record.id => {
                    if let Some(node) = self.nodes.remove(&(face, record.from)) {
                        lifted.push((node, record.destination(gravity)));
                    }
                }
                _ => {}
            }
        }
        for (mut node, to) in lifted {
            node.at = to;
            self.nodes.insert((face, to), node);
        }
    }

    fn remove_nodes(&mut self, ids: &[NodeId], face: Face) {
        self.calls.push(SurfaceCall::RemoveNodes {
            face,
            ids: ids.to_vec(),
        });
        self.nodes
            .retain(|(f, _), node| *f != face || !ids.contains(&node.id));
    }

    fn add_new_piece(&mut self, piece: Piece, at: GridPoint, face: Face) {
        self.calls.push(SurfaceCall::AddNewPiece { face, at, piece });
        if piece != Piece::Empty {
            self.spawn(face, at, piece);
        }
    }

    fn remove_node_at(&mut self, at: GridPoint, face: Face) {
        self.calls.push(SurfaceCall::RemoveNodeAt { face, at });
        self.nodes.remove(&(face, at));
    }

    fn update_plane(&mut self, face: Face) {
        self.calls.push(SurfaceCall::UpdatePlane { face });
    }
}
