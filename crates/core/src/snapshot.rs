//! Serializable views of boards and cubes.
//!
//! Cells are stored as piece codes (`0` = Empty, `1..=10` pieces, `11` = Block),
//! one inner vector per row.

use std::hash::Hasher;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cube::Cube;
use crate::error::EngineError;
use crate::types::{Face, GridPoint, Piece};

/// Stable 64-bit FNV-1a hasher for `board_hash`.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// FNV-1a over the row-major piece codes of a board
pub fn board_hash(board: &Board) -> u64 {
    let mut hasher = Fnv1aHasher::new();
    for piece in board.cells() {
        hasher.write_u8(piece.code());
    }
    hasher.finish()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub face: String,
    pub extent: usize,
    pub cells: Vec<Vec<u8>>,
    pub board_hash: u64,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        let cells = (0..board.extent())
            .filter_map(|y| board.row(y))
            .map(|row| row.iter().map(|p| p.code()).collect())
            .collect();
        Self {
            face: board.face().as_str().to_string(),
            extent: board.extent(),
            cells,
            board_hash: board_hash(board),
        }
    }

    /// Rebuild the board grid. Rules are not part of a snapshot and come back as defaults.
    pub fn restore(&self) -> Result<Board, EngineError> {
        let face = Face::from_str(&self.face)
            .ok_or_else(|| EngineError::InvalidConfig(format!("unknown face {:?}", self.face)))?;
        if self.extent == 0 || self.cells.len() != self.extent {
            return Err(EngineError::InvalidConfig(format!(
                "snapshot has {} rows for extent {}",
                self.cells.len(),
                self.extent
            )));
        }
        let mut board = Board::new(self.extent, face);
        for (y, row) in self.cells.iter().enumerate() {
            if row.len() != self.extent {
                return Err(EngineError::InvalidConfig(format!(
                    "snapshot row {} has {} cells",
                    y,
                    row.len()
                )));
            }
            for (x, code) in row.iter().enumerate() {
                let piece = Piece::from_code(*code).ok_or_else(|| {
                    EngineError::InvalidConfig(format!("unknown piece code {}", code))
                })?;
                board.set(GridPoint::new(x as i32, y as i32), piece)?;
            }
        }
        Ok(board)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    pub seed: u32,
    pub faces: Vec<BoardSnapshot>,
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}

impl Cube {
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot {
            seed: self.config().seed,
            faces: self.boards().map(BoardSnapshot::capture).collect(),
        }
    }
}
