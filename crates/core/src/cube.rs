//! Cube session - the six faces and the game loop steps that span them
//!
//! A `Cube` owns one [`Board`] per face (each with its own [`RuleSet`]) and the
//! RNG that deals them. It is created at game start and its boards are replaced
//! wholesale by [`Cube::reset`].
//!
//! [`RuleSet`]: crate::rules::RuleSet

use crate::board::Board;
use crate::config::CubeConfig;
use crate::delegate::{NodeId, VisualDelegate};
use crate::diag::diag_note;
use crate::error::EngineError;
use crate::faces::side_mapping;
use crate::matching::{check_for_matches, matched_points, MatchEvent};
use crate::rng::SimpleRng;
use crate::rules::{NewPieceSource, RuleSet};
use crate::swap::SwapRejection;
use crate::types::{Edge, Face, GridPoint, Piece};

/// Summary of one [`Cube::resolve`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    /// Detect, remove, collapse and refill passes performed
    pub rounds: usize,
    /// Cells cleared across all rounds
    pub removed: usize,
    /// The round limit was hit while matches remained
    pub truncated: bool,
}

/// Result of [`Cube::try_swap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    Rejected(SwapRejection),
    Swapped(CascadeReport),
}

impl SwapOutcome {
    pub fn is_swapped(&self) -> bool {
        matches!(self, SwapOutcome::Swapped(_))
    }
}

#[derive(Debug, Clone)]
pub struct Cube {
    config: CubeConfig,
    /// Indexed by `Face::index`
    boards: [Board; 6],
    rng: SimpleRng,
}

impl Cube {
    /// Validate `config` and deal a fresh cube.
    ///
    /// Each face starts with the palette `config.palette()` and is dealt from it.
    pub fn new(config: CubeConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut rules = RuleSet::default();
        rules.set_palette(&config.palette())?;
        let boards = Face::ALL.map(|face| Board::with_rules(config.extent, face, rules.clone()));
        let mut cube = Self {
            rng: SimpleRng::new(config.seed),
            config,
            boards,
        };
        cube.deal();
        Ok(cube)
    }

    /// Fill every face from its own rule set palette
    fn deal(&mut self) {
        let blocks = self.config.include_blocks;
        for board in &mut self.boards {
            board.populate_from_rules(&mut self.rng, blocks);
        }
    }

    /// Replace every board with a freshly dealt one.
    ///
    /// Rule sets are kept and each face is dealt from its current palette. The RNG
    /// restarts from the configured seed, so a reset cube with unchanged rules
    /// deals the same pieces as a new one.
    pub fn reset(&mut self) {
        let extent = self.config.extent;
        self.boards = Face::ALL.map(|face| {
            Board::with_rules(extent, face, self.boards[face.index()].rules().clone())
        });
        self.rng = SimpleRng::new(self.config.seed);
        self.deal();
    }

    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    pub fn board(&self, face: Face) -> &Board {
        &self.boards[face.index()]
    }

    pub fn board_mut(&mut self, face: Face) -> &mut Board {
        &mut self.boards[face.index()]
    }

    /// All boards in face order
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Face and edge across `edge` of `face`
    pub fn neighbor(&self, face: Face, edge: Edge) -> (Face, Edge) {
        side_mapping(face, edge)
    }

    pub fn rng_mut(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    /// Fill every `Empty` cell of `face` according to its new-piece source.
    ///
    /// Returns the number of cells filled.
    pub fn refill(
        &mut self,
        face: Face,
        delegate: &mut dyn VisualDelegate,
    ) -> Result<usize, EngineError> {
        let board = &mut self.boards[face.index()];
        if board.rules().new_piece_source == NewPieceSource::FromTopAdjacentFace {
            return Err(EngineError::Unsupported(
                "pulling new pieces from the adjacent top face",
            ));
        }

        let palette = board.rules().palette().to_vec();
        let holes: Vec<GridPoint> = board
            .points()
            .filter(|p| board[*p] == Piece::Empty)
            .collect();
        for at in &holes {
            let piece = self.rng.choose(&palette).unwrap_or(Piece::Piece1);
            board[*at] = piece;
            delegate.add_new_piece(piece, *at, face);
        }
        Ok(holes.len())
    }

    /// Clear matches on `face` until none remain or the round limit is hit.
    ///
    /// Each round removes every matched cell, collapses the face and refills it.
    pub fn resolve(
        &mut self,
        face: Face,
        delegate: &mut dyn VisualDelegate,
    ) -> Result<CascadeReport, EngineError> {
        let mut report = CascadeReport::default();
        loop {
            let events = check_for_matches(self.board(face));
            if events.is_empty() {
                break;
            }
            if report.rounds == self.config.max_cascade_rounds {
                diag_note!(
                    "cube",
                    "face {} still has {} matches after {} rounds",
                    face,
                    events.len(),
                    report.rounds
                );
                report.truncated = true;
                break;
            }

            let points = matched_points(&events);
            let ids: Vec<NodeId> = points
                .iter()
                .filter_map(|p| delegate.try_visual_node_id(*p, face))
                .collect();
            if !ids.is_empty() {
                delegate.remove_nodes(&ids, face);
            }

            let board = self.board_mut(face);
            for p in &points {
                board[*p] = Piece::Empty;
            }
            board.drop_pieces(delegate)?;
            self.refill(face, delegate)?;

            report.rounds += 1;
            report.removed += points.len();
        }

        if report.rounds > 0 {
            delegate.update_plane(face);
        }
        Ok(report)
    }

    /// Validate and perform a swap on `face`, then resolve the face.
    pub fn try_swap(
        &mut self,
        face: Face,
        a: GridPoint,
        b: GridPoint,
        delegate: &mut dyn VisualDelegate,
    ) -> Result<SwapOutcome, EngineError> {
        let board = self.board_mut(face);
        if let Err(reason) = board.check_swap(a, b) {
            diag_note!("swap", "rejected {} <-> {} on face {}: {}", a, b, face, reason.message());
            return Ok(SwapOutcome::Rejected(reason));
        }
        board.swap_pieces(a, b);

        for at in [a, b] {
            delegate.remove_node_at(at, face);
        }
        for at in [a, b] {
            delegate.add_new_piece(board[at], at, face);
        }

        let report = self.resolve(face, delegate)?;
        Ok(SwapOutcome::Swapped(report))
    }

    /// Runs that continue across the edges of `face`.
    ///
    /// Not implemented: any face whose rules enable a cross-face edge reports
    /// `Unsupported`. Faces with no such edge have nothing to report.
    pub fn check_cross_face_matches(&self, face: Face) -> Result<Vec<MatchEvent>, EngineError> {
        if self.board(face).rules().allows_cross_face_matching() {
            return Err(EngineError::Unsupported("cross-face matching"));
        }
        Ok(Vec::new())
    }
}
