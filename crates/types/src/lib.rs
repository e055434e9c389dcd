//! Core types module - shared vocabulary for the cube engine
//!
//! This module defines the fundamental value types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the text renderer and any presentation layer alike.
//!
//! # Coordinates
//!
//! A face is a square grid of `extent x extent` cells:
//!
//! - **x**: column, `0..extent` (left to right)
//! - **y**: row, `0..extent` (top to bottom)
//! - The default gravity edge is [`Edge::Bottom`] (row `extent - 1`)
//!
//! # Faces and edges
//!
//! | Face | Cube side |
//! |------|-----------|
//! | `A`..`F` | arbitrarily lettered; see the core crate for the folding table |
//!
//! Every face has four edges: `Top`, `Left`, `Bottom`, `Right`.
//!
//! # Examples
//!
//! ```
//! use cube_match3_types::{Edge, Face, GridPoint, Piece};
//!
//! let p = GridPoint::new(2, 3);
//! assert!(p.is_in_range(0, 8));
//! assert_eq!(p.to_string(), "(2,3)");
//!
//! assert_eq!(Piece::from_token('C'), Some(Piece::Piece3));
//! assert_eq!(Face::from_str("e"), Some(Face::E));
//! assert_eq!(Edge::Top.opposite(), Edge::Bottom);
//! ```

use std::fmt;

/// Default number of cells along each side of a face
pub const DEFAULT_EXTENT: usize = 9;

/// Shortest run that counts as a match
pub const MIN_RUN: usize = 3;

/// Longest run the detector reports
pub const MAX_RUN: usize = 5;

/// Number of colored piece kinds
pub const PALETTE_SIZE: usize = 10;

/// Integer grid coordinate: column `x`, row `y`.
///
/// Components are signed so callers can express points just off the board
/// (for example `(-1, 0)`) and have them rejected by range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point with both components set to `both`
    pub const fn splat(both: i32) -> Self {
        Self { x: both, y: both }
    }

    /// Translate by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True if both components lie in `[low, high]`
    ///
    /// ```
    /// use cube_match3_types::GridPoint;
    ///
    /// assert!(GridPoint::new(0, 0).is_in_range(0, 8));
    /// assert!(GridPoint::new(8, 8).is_in_range(0, 8));
    /// assert!(!GridPoint::new(-1, 0).is_in_range(0, 8));
    /// assert!(!GridPoint::new(0, 9).is_in_range(0, 8));
    /// ```
    pub const fn is_in_range(self, low: i32, high: i32) -> bool {
        self.x >= low && self.x <= high && self.y >= low && self.y <= high
    }

    /// Taxicab distance to `other`
    pub const fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True if `other` is one step away along exactly one axis.
    ///
    /// Diagonal neighbors and the point itself are not adjacent.
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Integer width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn square(extent: i32) -> Self {
        Self {
            width: extent,
            height: extent,
        }
    }

    /// Side length, only defined when the size is square
    pub const fn extent(self) -> Option<i32> {
        if self.width == self.height {
            Some(self.width)
        } else {
            None
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.width, self.height)
    }
}

/// The kinds of piece a cell can hold
///
/// - **Piece1..Piece10**: the colored palette, in draw order
/// - **Block**: immovable obstacle
/// - **Empty**: a logical hole waiting to be collapsed away; never rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    Piece1,
    Piece2,
    Piece3,
    Piece4,
    Piece5,
    Piece6,
    Piece7,
    Piece8,
    Piece9,
    Piece10,
    Block,
    Empty,
}

impl Piece {
    /// Every kind, in declaration order
    pub const ALL: [Piece; 12] = [
        Piece::Piece1,
        Piece::Piece2,
        Piece::Piece3,
        Piece::Piece4,
        Piece::Piece5,
        Piece::Piece6,
        Piece::Piece7,
        Piece::Piece8,
        Piece::Piece9,
        Piece::Piece10,
        Piece::Block,
        Piece::Empty,
    ];

    /// The colored kinds, in draw order
    pub const PALETTE: [Piece; PALETTE_SIZE] = [
        Piece::Piece1,
        Piece::Piece2,
        Piece::Piece3,
        Piece::Piece4,
        Piece::Piece5,
        Piece::Piece6,
        Piece::Piece7,
        Piece::Piece8,
        Piece::Piece9,
        Piece::Piece10,
    ];

    /// True for the ten colored kinds
    pub fn is_playable(self) -> bool {
        !matches!(self, Piece::Block | Piece::Empty)
    }

    /// True if a player may move this piece. Blocks and holes stay put.
    pub fn is_movable(self) -> bool {
        self.is_playable()
    }

    /// Compact numeric code: `0` = Empty, `1..=10` = palette, `11` = Block
    ///
    /// ```
    /// use cube_match3_types::Piece;
    ///
    /// assert_eq!(Piece::Empty.code(), 0);
    /// assert_eq!(Piece::Piece1.code(), 1);
    /// assert_eq!(Piece::Block.code(), 11);
    /// assert_eq!(Piece::from_code(10), Some(Piece::Piece10));
    /// ```
    pub fn code(self) -> u8 {
        match self {
            Piece::Empty => 0,
            Piece::Block => 11,
            other => other as u8 + 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Piece::Empty),
            1..=10 => Some(Piece::PALETTE[code as usize - 1]),
            11 => Some(Piece::Block),
            _ => None,
        }
    }

    /// Single-character token used by debug maps
    pub fn token(self) -> char {
        match self {
            Piece::Piece1 => 'A',
            Piece::Piece2 => 'B',
            Piece::Piece3 => 'C',
            Piece::Piece4 => 'D',
            Piece::Piece5 => 'E',
            Piece::Piece6 => 'F',
            Piece::Piece7 => 'G',
            Piece::Piece8 => 'H',
            Piece::Piece9 => 'I',
            Piece::Piece10 => 'J',
            Piece::Block => 'Z',
            Piece::Empty => '.',
        }
    }

    /// Parse a debug map token. A space is accepted as `Empty` as well as `.`.
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'A'..='J' => Some(Piece::PALETTE[(token as u8 - b'A') as usize]),
            'Z' => Some(Piece::Block),
            '.' | ' ' => Some(Piece::Empty),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Piece::Piece1 => "piece1",
            Piece::Piece2 => "piece2",
            Piece::Piece3 => "piece3",
            Piece::Piece4 => "piece4",
            Piece::Piece5 => "piece5",
            Piece::Piece6 => "piece6",
            Piece::Piece7 => "piece7",
            Piece::Piece8 => "piece8",
            Piece::Piece9 => "piece9",
            Piece::Piece10 => "piece10",
            Piece::Block => "block",
            Piece::Empty => "empty",
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Piece::ALL.iter().copied().find(|p| p.as_str() == lower)
    }
}

/// The six faces (planes) of the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::A, Face::B, Face::C, Face::D, Face::E, Face::F];

    /// Position of the face in [`Face::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Face::A => "A",
            Face::B => "B",
            Face::C => "C",
            Face::D => "D",
            Face::E => "E",
            Face::F => "F",
        }
    }

    /// Parse a face letter (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" => Some(Face::A),
            "B" => Some(Face::B),
            "C" => Some(Face::C),
            "D" => Some(Face::D),
            "E" => Some(Face::E),
            "F" => Some(Face::F),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four edges of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    pub fn opposite(self) -> Self {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Left => "left",
            Edge::Bottom => "bottom",
            Edge::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step along the axis
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}
