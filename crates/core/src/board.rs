//! Board module - the grid of one cube face
//!
//! A board is an `extent x extent` grid where every cell always holds exactly one
//! [`Piece`]. `Empty` is a real occupant (a hole waiting to be collapsed), never a
//! missing entry. Cells live in a flat row-major vector (`y * extent + x`).
//!
//! Coordinates: `(x, y)` with `x` the column and `y` the row, both `0..extent`.
//! Row `extent - 1` sits on the bottom edge.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::diag::diag_note;
use crate::error::EngineError;
use crate::rng::{draw_pool, SimpleRng};
use crate::rules::RuleSet;
use crate::types::{Face, GridPoint, Orientation, Piece};

/// Debug patterns that can be stamped onto a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestPattern {
    Horizontal3,
    Vertical3,
    Horizontal4,
    Vertical4,
    Horizontal5,
    Vertical5,
}

impl TestPattern {
    pub const ALL: [TestPattern; 6] = [
        TestPattern::Horizontal3,
        TestPattern::Vertical3,
        TestPattern::Horizontal4,
        TestPattern::Vertical4,
        TestPattern::Horizontal5,
        TestPattern::Vertical5,
    ];

    pub fn len(self) -> usize {
        match self {
            TestPattern::Horizontal3 | TestPattern::Vertical3 => 3,
            TestPattern::Horizontal4 | TestPattern::Vertical4 => 4,
            TestPattern::Horizontal5 | TestPattern::Vertical5 => 5,
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            TestPattern::Horizontal3 | TestPattern::Horizontal4 | TestPattern::Horizontal5 => {
                Orientation::Horizontal
            }
            _ => Orientation::Vertical,
        }
    }
}

/// The grid of one face
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    extent: usize,
    face: Face,
    /// Flat array of cells, row-major order (y * extent + x)
    cells: Vec<Piece>,
    rules: RuleSet,
}

impl Board {
    /// Create a board of `Empty` cells with default rules.
    ///
    /// # Panics
    ///
    /// Panics if `extent` is zero.
    pub fn new(extent: usize, face: Face) -> Self {
        Self::with_rules(extent, face, RuleSet::default())
    }

    pub fn with_rules(extent: usize, face: Face, rules: RuleSet) -> Self {
        assert!(extent > 0, "board extent must be positive");
        Self {
            extent,
            face,
            cells: vec![Piece::Empty; extent * extent],
            rules,
        }
    }

    /// Parse a board from its debug map: one line per row, one token per cell.
    ///
    /// Blank lines and surrounding whitespace are ignored (interior spaces are
    /// `Empty`). The text must be square.
    ///
    /// ```
    /// use cube_match3_core::{Board, Piece};
    /// use cube_match3_core::types::{Face, GridPoint};
    ///
    /// let board = Board::from_debug_map(Face::A, "
    ///     AAB
    ///     .ZC
    ///     CCC
    /// ").unwrap();
    /// assert_eq!(board.extent(), 3);
    /// assert_eq!(board.get(GridPoint::new(1, 1)), Some(Piece::Block));
    /// ```
    pub fn from_debug_map(face: Face, text: &str) -> Result<Self, EngineError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let extent = rows.len();
        if extent == 0 {
            return Err(EngineError::InvalidConfig("debug map has no rows".into()));
        }

        let mut board = Board::new(extent, face);
        for (y, row) in rows.iter().enumerate() {
            let tokens: Vec<char> = row.chars().collect();
            if tokens.len() != extent {
                return Err(EngineError::InvalidConfig(format!(
                    "debug map row {} has {} cells, expected {}",
                    y,
                    tokens.len(),
                    extent
                )));
            }
            for (x, token) in tokens.into_iter().enumerate() {
                let piece = Piece::from_token(token).ok_or(EngineError::UnknownToken(token))?;
                board.cells[y * extent + x] = piece;
            }
        }
        Ok(board)
    }

    /// Calculate flat index from a point, `None` when out of range
    #[inline(always)]
    fn flat_index(&self, p: GridPoint) -> Option<usize> {
        if self.is_valid_point(p) {
            Some(p.y as usize * self.extent + p.x as usize)
        } else {
            None
        }
    }

    fn out_of_range(&self, point: GridPoint) -> EngineError {
        EngineError::OutOfRange {
            point,
            extent: self.extent,
        }
    }

    pub fn extent(&self) -> usize {
        self.extent
    }

    pub fn width(&self) -> usize {
        self.extent
    }

    pub fn height(&self) -> usize {
        self.extent
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    /// True iff both components lie in `[0, extent - 1]`
    pub fn is_valid_point(&self, p: GridPoint) -> bool {
        p.is_in_range(0, self.extent as i32 - 1)
    }

    /// Piece at `p`, `None` if out of range
    pub fn get(&self, p: GridPoint) -> Option<Piece> {
        self.flat_index(p).map(|idx| self.cells[idx])
    }

    /// Overwrite the piece at `p`
    pub fn set(&mut self, p: GridPoint, piece: Piece) -> Result<(), EngineError> {
        let idx = self.flat_index(p).ok_or_else(|| self.out_of_range(p))?;
        self.cells[idx] = piece;
        Ok(())
    }

    /// Fill every cell with a random piece from palette ordinals `0..=limit`,
    /// plus `Block` if requested.
    ///
    /// No match avoidance: a freshly dealt board may already contain runs.
    pub fn initial_populate(&mut self, rng: &mut SimpleRng, limit: usize, include_blocks: bool) {
        let pool = draw_pool(limit, include_blocks);
        self.fill_from(rng, &pool);
    }

    /// Fill every cell from the rule set palette, plus `Block` if requested
    pub fn populate_from_rules(&mut self, rng: &mut SimpleRng, include_blocks: bool) {
        let mut pool = self.rules.palette().to_vec();
        if include_blocks {
            pool.push(Piece::Block);
        }
        self.fill_from(rng, &pool);
    }

    fn fill_from(&mut self, rng: &mut SimpleRng, pool: &[Piece]) {
        for cell in &mut self.cells {
            *cell = rng.choose(pool).unwrap_or(Piece::Piece1);
        }
    }

    /// Number of cells holding `kind`
    pub fn piece_count(&self, kind: Piece) -> usize {
        self.cells.iter().filter(|cell| **cell == kind).count()
    }

    /// Overwrite `count` consecutive cells starting at `start`. Debug helper.
    ///
    /// # Panics
    ///
    /// Panics if the run leaves the board.
    pub fn replace_pieces(
        &mut self,
        start: GridPoint,
        kind: Piece,
        count: usize,
        horizontal: bool,
    ) {
        for i in 0..count as i32 {
            let p = if horizontal {
                start.offset(i, 0)
            } else {
                start.offset(0, i)
            };
            self[p] = kind;
        }
    }

    /// Stamp a debug pattern with its first cell at `at`.
    ///
    /// Nothing is written if any cell of the pattern would leave the board.
    pub fn insert_test_pattern(
        &mut self,
        pattern: TestPattern,
        piece: Piece,
        at: GridPoint,
    ) -> Result<(), EngineError> {
        let (dx, dy) = pattern.orientation().step();
        let last = at.offset(dx * (pattern.len() as i32 - 1), dy * (pattern.len() as i32 - 1));
        for p in [at, last] {
            if !self.is_valid_point(p) {
                diag_note!("board", "test pattern {:?} does not fit at {}", pattern, at);
                return Err(self.out_of_range(p));
            }
        }
        self.replace_pieces(
            at,
            piece,
            pattern.len(),
            pattern.orientation() == Orientation::Horizontal,
        );
        Ok(())
    }

    /// Shift rows `0..=from` of `column` down so the piece at `from` lands on `to`.
    ///
    /// The rows vacated at the top become `Empty`. Shifting up is not supported.
    pub fn shift_column(&mut self, column: i32, from: i32, to: i32) -> Result<(), EngineError> {
        let last = self.extent as i32 - 1;
        if column < 0 || column > last || to < 0 || to > last || from < 0 || from >= to {
            return Err(EngineError::InvalidShift { column, from, to });
        }
        let delta = to - from;
        for row in (0..=from).rev() {
            let piece = self[GridPoint::new(column, row)];
            self[GridPoint::new(column, row + delta)] = piece;
        }
        for row in 0..delta {
            self[GridPoint::new(column, row)] = Piece::Empty;
        }
        Ok(())
    }

    /// First `Empty` row in `column` at or after `after`, scanning toward the bottom.
    ///
    /// The last row is included.
    pub fn first_empty_row_in(&self, column: i32, after: i32) -> Option<i32> {
        (after.max(0)..self.extent as i32)
            .find(|&y| self.get(GridPoint::new(column, y)) == Some(Piece::Empty))
    }

    /// True if any cell of `column` is `Empty`
    pub fn column_has_gaps(&self, column: i32) -> bool {
        self.first_empty_row_in(column, 0).is_some()
    }

    /// Copy the piece at `from` onto `to`. False (and no change) if either is invalid.
    pub fn move_piece(&mut self, from: GridPoint, to: GridPoint) -> bool {
        match (self.flat_index(from), self.flat_index(to)) {
            (Some(src), Some(dst)) => {
                self.cells[dst] = self.cells[src];
                true
            }
            _ => false,
        }
    }

    /// Reset every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Piece::Empty);
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Piece] {
        &self.cells
    }

    /// One row, left to right. `None` if `y` is out of range.
    pub fn row(&self, y: usize) -> Option<&[Piece]> {
        if y >= self.extent {
            return None;
        }
        let start = y * self.extent;
        Some(&self.cells[start..start + self.extent])
    }

    /// Every point on the board in row-major order
    pub fn points(&self) -> impl Iterator<Item = GridPoint> {
        let extent = self.extent as i32;
        (0..extent).flat_map(move |y| (0..extent).map(move |x| GridPoint::new(x, y)))
    }

    /// Token map of the board, one line per row
    pub fn debug_map(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.extent);
        for y in 0..self.extent {
            for piece in self.row(y).unwrap_or_default() {
                out.push(piece.token());
            }
            out.push('\n');
        }
        out
    }
}

impl Index<GridPoint> for Board {
    type Output = Piece;

    /// # Panics
    ///
    /// Panics if `p` is out of range.
    fn index(&self, p: GridPoint) -> &Piece {
        match self.flat_index(p) {
            Some(idx) => &self.cells[idx],
            None => panic!("{}", self.out_of_range(p)),
        }
    }
}

impl IndexMut<GridPoint> for Board {
    fn index_mut(&mut self, p: GridPoint) -> &mut Piece {
        match self.flat_index(p) {
            Some(idx) => &mut self.cells[idx],
            None => panic!("{}", self.out_of_range(p)),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(9, Face::A);
        assert_eq!(board.flat_index(GridPoint::new(0, 0)), Some(0));
        assert_eq!(board.flat_index(GridPoint::new(8, 0)), Some(8));
        assert_eq!(board.flat_index(GridPoint::new(0, 1)), Some(9));
        assert_eq!(board.flat_index(GridPoint::new(8, 8)), Some(80));
        assert_eq!(board.flat_index(GridPoint::new(-1, 0)), None);
        assert_eq!(board.flat_index(GridPoint::new(9, 0)), None);
        assert_eq!(board.flat_index(GridPoint::new(0, 9)), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new(9, Face::A);
        board.set(GridPoint::new(0, 0), Piece::Piece1).unwrap();
        board.set(GridPoint::new(5, 3), Piece::Piece7).unwrap();

        assert_eq!(board.cells[0], Piece::Piece1);
        assert_eq!(board.cells[3 * 9 + 5], Piece::Piece7);
    }

    #[test]
    fn shift_column_moves_run_down_and_clears_top() {
        let mut board = Board::from_debug_map(
            Face::A,
            "
            A...
            B...
            C...
            D...
            ",
        )
        .unwrap();
        board.shift_column(0, 1, 3).unwrap();
        let column: String = (0..4)
            .map(|y| board[GridPoint::new(0, y)].token())
            .collect();
        assert_eq!(column, "..AB");
    }

    #[test]
    fn shift_column_rejects_raise_and_out_of_range() {
        let mut board = Board::new(5, Face::B);
        assert!(matches!(
            board.shift_column(0, 3, 3),
            Err(EngineError::InvalidShift { .. })
        ));
        assert!(board.shift_column(0, 3, 1).is_err());
        assert!(board.shift_column(0, 0, 5).is_err());
        assert!(board.shift_column(0, 0, -1).is_err());
        assert!(board.shift_column(7, 0, 2).is_err());
    }

    #[test]
    fn gap_queries_include_the_bottom_row() {
        let mut board = Board::from_debug_map(
            Face::A,
            "
            AB.
            AB.
            A.B
            ",
        )
        .unwrap();
        assert!(!board.column_has_gaps(0));
        assert!(board.column_has_gaps(1));
        assert_eq!(board.first_empty_row_in(1, 0), Some(2));
        assert_eq!(board.first_empty_row_in(2, 1), Some(1));
        assert_eq!(board.first_empty_row_in(2, 2), None);

        board.set(GridPoint::new(0, 2), Piece::Empty).unwrap();
        assert!(board.column_has_gaps(0));
    }

    #[test]
    #[should_panic(expected = "outside a board")]
    fn direct_index_out_of_range_panics() {
        let board = Board::new(3, Face::A);
        let _ = board[GridPoint::new(3, 0)];
    }
}
