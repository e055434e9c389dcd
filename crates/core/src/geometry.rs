//! Projection from a face grid onto the cube surface.
//!
//! | Face | Varying axes | Constant axis |
//! |------|--------------|---------------|
//! | A    | X, Y         | Z = +d        |
//! | B    | X, Y         | Z = -d        |
//! | C    | X, Z         | Y = +d        |
//! | D    | X, Z         | Y = -d        |
//! | E    | Y, Z         | X = +d        |
//! | F    | Y, Z         | X = -d        |
//!
//! The first varying axis takes the logical x minus half the width, the second the
//! logical y minus half the height.

use crate::types::{Face, GridPoint};

/// Point in scene space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Place a logical position on the surface of `face`, `distance` from the center
pub fn piece_coordinate(
    face: Face,
    distance: f64,
    logical_x: f64,
    logical_y: f64,
    width: f64,
    height: f64,
) -> Vec3 {
    let u = logical_x - width / 2.0;
    let v = logical_y - height / 2.0;
    match face {
        Face::A => Vec3::new(u, v, distance),
        Face::B => Vec3::new(u, v, -distance),
        Face::C => Vec3::new(u, distance, v),
        Face::D => Vec3::new(u, -distance, v),
        Face::E => Vec3::new(distance, u, v),
        Face::F => Vec3::new(-distance, u, v),
    }
}

/// Center of cell `at` on a board of `board_size` scene units and `extent` cells.
///
/// A tenth of the board width is kept as margin, split across both sides. Rows are
/// flipped so row 0 sits at the top of the face.
pub fn make_piece_coordinate(
    at: GridPoint,
    face: Face,
    board_size: (f64, f64),
    extent: usize,
) -> Vec3 {
    let (width, height) = board_size;
    let margin = width * 0.1;
    let side = margin / 2.0;
    let cell = (width - margin) / extent as f64;
    let half = cell / 2.0;
    let column = side + at.x as f64 * cell + half;
    let row = side + ((extent as i32 - 1) - at.y) as f64 * cell + half;
    piece_coordinate(face, width / 2.0, column, row, width, height)
}
