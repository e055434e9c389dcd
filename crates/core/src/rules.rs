//! Per-face rule set.
//!
//! Rules may differ between faces and need not be symmetric across a shared edge.
//! Gravity and cross-face edge lists are deduplicated on assignment, keeping the
//! first occurrence of each edge.

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::types::{Edge, GridPoint, Piece};

/// Where replacement pieces come from after a collapse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewPieceSource {
    /// Pieces are pulled in from the face across the top edge
    FromTopAdjacentFace,
    /// Pieces appear at the top edge, drawn at random from the palette
    SpawnAtTop,
}

/// What happens to pieces that reach the gravity edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OldPieceSink {
    /// Pieces never fall
    Stationary,
    /// Pieces fall and come to rest at the logical bottom of the face
    LogicalBottom,
    /// Pieces fall off the bottom onto the face across the bottom edge
    ToAdjacentBottomFace,
}

/// Game rule consulted once two cells pass the adjacency check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapRule {
    /// No swap is ever legal
    Disabled,
    /// Any two adjacent movable pieces may trade places
    Adjacent,
    /// Standard match-3: the swap must produce a run through one of the two cells
    MustCreateMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    palette: Vec<Piece>,
    gravity: ArrayVec<Edge, 4>,
    cross_face_edges: ArrayVec<Edge, 4>,
    pub new_piece_source: NewPieceSource,
    pub old_piece_sink: OldPieceSink,
    pub swap_rule: SwapRule,
}

impl Default for RuleSet {
    fn default() -> Self {
        let mut gravity = ArrayVec::new();
        gravity.push(Edge::Bottom);
        Self {
            palette: Piece::PALETTE[..5].to_vec(),
            gravity,
            cross_face_edges: dedup_edges(&[Edge::Top, Edge::Bottom, Edge::Left, Edge::Right]),
            new_piece_source: NewPieceSource::SpawnAtTop,
            old_piece_sink: OldPieceSink::LogicalBottom,
            swap_rule: SwapRule::Disabled,
        }
    }
}

impl RuleSet {
    pub fn palette(&self) -> &[Piece] {
        &self.palette
    }

    /// Replace the palette used for random population and refills.
    ///
    /// Only colored pieces are allowed; duplicates are dropped.
    pub fn set_palette(&mut self, palette: &[Piece]) -> Result<(), EngineError> {
        if palette.is_empty() {
            return Err(EngineError::InvalidRule("palette is empty"));
        }
        if palette.iter().any(|p| !p.is_playable()) {
            return Err(EngineError::InvalidRule(
                "palette may only hold colored pieces",
            ));
        }
        let mut unique = Vec::with_capacity(palette.len());
        for piece in palette {
            if !unique.contains(piece) {
                unique.push(*piece);
            }
        }
        self.palette = unique;
        Ok(())
    }

    pub fn gravity(&self) -> &[Edge] {
        &self.gravity
    }

    pub fn set_gravity(&mut self, edges: &[Edge]) -> Result<(), EngineError> {
        if edges.is_empty() {
            return Err(EngineError::InvalidRule("gravity needs at least one edge"));
        }
        self.gravity = dedup_edges(edges);
        Ok(())
    }

    /// First configured gravity edge. It wins ties between edges.
    pub fn primary_gravity(&self) -> Edge {
        self.gravity.first().copied().unwrap_or(Edge::Bottom)
    }

    /// Gravity edge closest to `point` on a face of `extent`.
    ///
    /// Ties go to the edge listed first.
    pub fn nearest_gravity_edge(&self, point: GridPoint, extent: usize) -> Edge {
        let last = extent as i32 - 1;
        let distance = |edge: Edge| match edge {
            Edge::Top => point.y,
            Edge::Bottom => last - point.y,
            Edge::Left => point.x,
            Edge::Right => last - point.x,
        };
        let mut best = self.primary_gravity();
        for edge in self.gravity.iter().copied() {
            if distance(edge) < distance(best) {
                best = edge;
            }
        }
        best
    }

    pub fn cross_face_edges(&self) -> &[Edge] {
        &self.cross_face_edges
    }

    pub fn set_cross_face_edges(&mut self, edges: &[Edge]) {
        self.cross_face_edges = dedup_edges(edges);
    }

    pub fn allows_cross_face_matching(&self) -> bool {
        !self.cross_face_edges.is_empty()
    }
}

fn dedup_edges(edges: &[Edge]) -> ArrayVec<Edge, 4> {
    let mut out = ArrayVec::new();
    for edge in edges {
        if !out.contains(edge) {
            out.push(*edge);
        }
    }
    out
}
