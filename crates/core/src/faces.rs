//! Face adjacency tables.
//!
//! The cube folds irregularly, so every relation here is a literal table over the
//! closed `Face`/`Edge` enums. The edge mapping is not symmetric: following an
//! edge and then its reported neighbor edge does not always lead back.

use crate::delegate::VisualNode;
use crate::types::{Edge, Face};

/// Face and edge on the other side of `edge` of `face`
pub fn side_mapping(face: Face, edge: Edge) -> (Face, Edge) {
    use Edge::*;
    use Face::*;
    match (face, edge) {
        (A, Top) => (B, Bottom),
        (A, Left) => (F, Right),
        (A, Bottom) => (D, Top),
        (A, Right) => (E, Left),

        (B, Top) => (C, Top),
        (B, Left) => (F, Top),
        (B, Bottom) => (A, Top),
        (B, Right) => (E, Left),

        (C, Top) => (B, Top),
        (C, Left) => (E, Left),
        (C, Bottom) => (D, Bottom),
        (C, Right) => (F, Left),

        (D, Top) => (A, Bottom),
        (D, Left) => (F, Bottom),
        (D, Bottom) => (C, Bottom),
        (D, Right) => (E, Bottom),

        (E, Top) => (B, Right),
        (E, Left) => (A, Right),
        (E, Bottom) => (D, Right),
        (E, Right) => (D, Left),

        (F, Top) => (B, Left),
        (F, Left) => (C, Right),
        (F, Bottom) => (D, Left),
        (F, Right) => (A, Left),
    }
}

/// Logical face to the physical face it is drawn on
pub fn surface_mapping(face: Face) -> Face {
    match face {
        Face::B => Face::C,
        Face::C => Face::B,
        other => other,
    }
}

/// Geometry slot of a physical face on the rendered cube
pub fn geometry_slot(physical: Face) -> usize {
    match physical {
        Face::A => 0,
        Face::B => 4,
        Face::C => 2,
        Face::D => 5,
        Face::E => 1,
        Face::F => 3,
    }
}

/// Geometry slot for a logical face. Pass the logical face, not a mapped one.
pub fn side_index(face: Face) -> usize {
    geometry_slot(surface_mapping(face))
}

/// Same-face, one-step adjacency on visual handles.
///
/// Uses the same adjacency rule as the board-level swap check.
pub fn valid_swap(a: &VisualNode, b: &VisualNode) -> bool {
    a.face == b.face && a.at.is_adjacent_to(b.at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::NodeId;
    use crate::types::{GridPoint, Piece};

    #[test]
    fn side_indices_cover_every_slot() {
        let mut slots: Vec<usize> = Face::ALL.iter().map(|f| side_index(*f)).collect();
        assert_eq!(side_index(Face::B), 2);
        assert_eq!(side_index(Face::C), 4);
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn surface_mapping_swaps_b_and_c_only() {
        for face in Face::ALL {
            assert_eq!(surface_mapping(surface_mapping(face)), face);
        }
        assert_eq!(surface_mapping(Face::E), Face::E);
    }

    #[test]
    fn mapping_never_points_back_at_the_same_face() {
        for face in Face::ALL {
            for edge in Edge::ALL {
                assert_ne!(side_mapping(face, edge).0, face);
            }
        }
    }

    #[test]
    fn valid_swap_needs_same_face_and_unit_step() {
        let node = |face, x, y| VisualNode {
            id: NodeId(0),
            face,
            at: GridPoint::new(x, y),
            piece: Piece::Piece1,
        };
        assert!(valid_swap(&node(Face::A, 1, 1), &node(Face::A, 1, 2)));
        assert!(!valid_swap(&node(Face::A, 1, 1), &node(Face::B, 1, 2)));
        assert!(!valid_swap(&node(Face::A, 1, 1), &node(Face::A, 2, 2)));
        assert!(!valid_swap(&node(Face::A, 1, 1), &node(Face::A, 1, 1)));
    }
}
