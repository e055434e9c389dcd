//! Boundary to the presentation layer.
//!
//! The engine never owns visual objects. It asks a [`VisualDelegate`] to look up
//! nodes and sends it fire-and-forget requests; nothing it does waits on them, and
//! the logical board is updated independently of whatever the delegate animates.

use std::fmt;

use crate::error::EngineError;
use crate::types::{Edge, Face, GridPoint, Piece};

/// Opaque identifier of an on-screen piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Handle to a visual piece as the delegate reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualNode {
    pub id: NodeId,
    pub face: Face,
    pub at: GridPoint,
    pub piece: Piece,
}

/// One piece that has to fall `distance` cells toward the gravity edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropRecord {
    pub from: GridPoint,
    pub distance: usize,
    pub id: NodeId,
}

impl DropRecord {
    /// Where the piece lands when falling toward `gravity`
    pub fn destination(&self, gravity: Edge) -> GridPoint {
        let d = self.distance as i32;
        match gravity {
            Edge::Bottom => self.from.offset(0, d),
            Edge::Top => self.from.offset(0, -d),
            Edge::Left => self.from.offset(-d, 0),
            Edge::Right => self.from.offset(d, 0),
        }
    }
}

pub trait VisualDelegate {
    /// Node at a logical location, if any
    fn visual_node(&self, at: GridPoint, face: Face) -> Option<VisualNode>;

    /// Id of the node at `at`; a missing node is a contract violation
    fn visual_node_id(&self, at: GridPoint, face: Face) -> Result<NodeId, EngineError> {
        self.visual_node(at, face)
            .map(|node| node.id)
            .ok_or(EngineError::MissingNode { point: at, face })
    }

    fn try_visual_node_id(&self, at: GridPoint, face: Face) -> Option<NodeId> {
        self.visual_node(at, face).map(|node| node.id)
    }

    /// Animate pieces falling toward `gravity`
    fn move_pieces(&mut self, moves: &[DropRecord], face: Face, gravity: Edge);

    fn remove_nodes(&mut self, ids: &[NodeId], face: Face);

    fn add_new_piece(&mut self, piece: Piece, at: GridPoint, face: Face);

    /// Remove whatever node sits at `at`. No-op when there is none.
    fn remove_node_at(&mut self, at: GridPoint, face: Face);

    /// Redraw a whole face
    fn update_plane(&mut self, face: Face);
}

/// Delegate with no visual backing at all. Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDelegate;

impl VisualDelegate for NullDelegate {
    fn visual_node(&self, _at: GridPoint, _face: Face) -> Option<VisualNode> {
        None
    }

    fn move_pieces(&mut self, _moves: &[DropRecord], _face: Face, _gravity: Edge) {}

    fn remove_nodes(&mut self, _ids: &[NodeId], _face: Face) {}

    fn add_new_piece(&mut self, _piece: Piece, _at: GridPoint, _face: Face) {}

    fn remove_node_at(&mut self, _at: GridPoint, _face: Face) {}

    fn update_plane(&mut self, _face: Face) {}
}
