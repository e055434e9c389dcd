//! Core match-three logic for a six-faced cube - pure, deterministic, and testable
//!
//! Each face of the cube is an independent square grid of pieces. This crate holds
//! the grid model, match detection, swap validation, collapse and the tables that
//! connect faces at their edges. It has no rendering of its own: everything visual
//! goes through the [`VisualDelegate`] boundary, and [`HeadlessSurface`] stands in
//! for a renderer in tests and tools.
//!
//! # Module Structure
//!
//! - [`board`]: per-face grid, population, debug maps
//! - [`rules`]: per-face rule set (palette, gravity, sources and sinks, swap rule)
//! - [`matching`]: run detection and available-move search
//! - [`swap`]: swap validation
//! - [`collapse`]: drop lists and packing toward the gravity edge
//! - [`faces`]: edge adjacency and geometry slot tables
//! - [`geometry`]: projection of grid cells onto the cube surface
//! - [`delegate`]: the visual delegate trait and drop records
//! - [`surface`]: in-memory delegate that records every request
//! - [`cube`]: six-face session with cascade resolution
//! - [`snapshot`]: serializable board and cube views
//! - [`config`]: cube settings and environment overrides
//! - [`rng`]: seeded LCG for deterministic deals
//!
//! # Example
//!
//! ```
//! use cube_match3_core::{Cube, CubeConfig, HeadlessSurface, SwapRule};
//! use cube_match3_core::matching::{available_moves, check_for_matches};
//! use cube_match3_core::types::Face;
//!
//! let mut cube = Cube::new(CubeConfig::default()).unwrap();
//! let mut surface = HeadlessSurface::new();
//! for board in cube.boards() {
//!     surface.mirror_board(board);
//! }
//!
//! cube.board_mut(Face::A).rules_mut().swap_rule = SwapRule::MustCreateMatch;
//! cube.resolve(Face::A, &mut surface).unwrap();
//! assert!(check_for_matches(cube.board(Face::A)).is_empty());
//!
//! if let Some(&(a, b)) = available_moves(cube.board(Face::A)).first() {
//!     let outcome = cube.try_swap(Face::A, a, b, &mut surface).unwrap();
//!     assert!(outcome.is_swapped());
//! }
//! assert!(surface.shows(cube.board(Face::A)));
//! ```

pub mod board;
pub mod collapse;
pub mod config;
pub mod cube;
pub mod delegate;
pub(crate) mod diag;
pub mod error;
pub mod faces;
pub mod geometry;
pub mod matching;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod surface;
pub mod swap;

pub use cube_match3_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, TestPattern};
pub use config::CubeConfig;
pub use cube::{CascadeReport, Cube, SwapOutcome};
pub use delegate::{DropRecord, NodeId, NullDelegate, VisualDelegate, VisualNode};
pub use error::EngineError;
pub use faces::{side_index, side_mapping, valid_swap};
pub use geometry::Vec3;
pub use matching::MatchEvent;
pub use rng::SimpleRng;
pub use rules::{NewPieceSource, OldPieceSink, RuleSet, SwapRule};
pub use snapshot::{BoardSnapshot, CubeSnapshot};
pub use surface::{HeadlessSurface, SurfaceCall};
pub use swap::SwapRejection;
pub use types::{Edge, Face, GridPoint, Piece};
