//! Swap validator.
//!
//! A swap exchanges two cells of the same face. Geometry is checked first (both
//! points valid, distinct, one axis step apart), then the face's [`SwapRule`].
//! Swapping across faces is not supported.

use crate::board::Board;
use crate::diag::diag_note;
use crate::matching::swap_creates_match;
use crate::rules::SwapRule;
use crate::types::GridPoint;

/// Why a swap was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRejection {
    InvalidPoint,
    SamePoint,
    NotAdjacent,
    Immovable,
    RuleDisabled,
    NoMatch,
}

impl SwapRejection {
    pub fn code(self) -> &'static str {
        match self {
            SwapRejection::InvalidPoint | SwapRejection::SamePoint | SwapRejection::NotAdjacent => {
                "invalid_swap"
            }
            SwapRejection::Immovable => "immovable",
            SwapRejection::RuleDisabled | SwapRejection::NoMatch => "rule_rejected",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SwapRejection::InvalidPoint => "point is outside the board",
            SwapRejection::SamePoint => "cannot swap a cell with itself",
            SwapRejection::NotAdjacent => "cells are not axis-aligned neighbors",
            SwapRejection::Immovable => "blocks and empty cells cannot be swapped",
            SwapRejection::RuleDisabled => "swapping is disabled on this face",
            SwapRejection::NoMatch => "swap would not create a match",
        }
    }
}

impl Board {
    /// Full validation of a prospective swap
    pub fn check_swap(&self, a: GridPoint, b: GridPoint) -> Result<(), SwapRejection> {
        if !self.is_valid_point(a) || !self.is_valid_point(b) {
            return Err(SwapRejection::InvalidPoint);
        }
        if a == b {
            return Err(SwapRejection::SamePoint);
        }
        if !a.is_adjacent_to(b) {
            return Err(SwapRejection::NotAdjacent);
        }

        match self.rules().swap_rule {
            SwapRule::Disabled => Err(SwapRejection::RuleDisabled),
            SwapRule::Adjacent | SwapRule::MustCreateMatch
                if !self[a].is_movable() || !self[b].is_movable() =>
            {
                Err(SwapRejection::Immovable)
            }
            SwapRule::Adjacent => Ok(()),
            SwapRule::MustCreateMatch => {
                if swap_creates_match(self, a, b) {
                    Ok(())
                } else {
                    Err(SwapRejection::NoMatch)
                }
            }
        }
    }

    pub fn can_swap_pieces(&self, a: GridPoint, b: GridPoint) -> bool {
        self.check_swap(a, b).is_ok()
    }

    /// Exchange two cells without validation. No-op if either point is invalid.
    pub fn swap_pieces(&mut self, a: GridPoint, b: GridPoint) {
        let (Some(pa), Some(pb)) = (self.get(a), self.get(b)) else {
            return;
        };
        self[a] = pb;
        self[b] = pa;
    }

    /// Validate then swap. Returns whether the swap happened.
    pub fn try_swap_pieces(&mut self, a: GridPoint, b: GridPoint) -> bool {
        match self.check_swap(a, b) {
            Ok(()) => {
                self.swap_pieces(a, b);
                true
            }
            Err(reason) => {
                diag_note!(
                    "swap",
                    "rejected {} <-> {} on face {}: {}",
                    a,
                    b,
                    self.face(),
                    reason.message()
                );
                false
            }
        }
    }
}
