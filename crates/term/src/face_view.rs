//! FaceView: maps a `core::Board` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Cube};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Piece;

/// Fill color of each colored piece, in palette order
const PIECE_COLORS: [Rgb; 10] = [
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(0, 128, 128),   // teal
    Rgb::new(128, 0, 128),   // purple
    Rgb::new(62, 180, 137),  // mint
    Rgb::new(255, 0, 0),     // red
    Rgb::new(150, 75, 0),    // brown
    Rgb::new(255, 159, 0),   // orange peel
    Rgb::new(150, 60, 60),   // azuki
    Rgb::new(255, 215, 0),   // gold
    Rgb::new(0, 50, 98),     // berkeley blue
];

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Fill color of a colored piece. `None` for `Block` and `Empty`.
pub fn piece_color(piece: Piece) -> Option<Rgb> {
    Piece::PALETTE
        .iter()
        .position(|p| *p == piece)
        .map(|i| PIECE_COLORS[i])
}

/// Style a piece is drawn with
pub fn piece_style(piece: Piece) -> CellStyle {
    match (piece, piece_color(piece)) {
        (_, Some(color)) => CellStyle {
            bold: true,
            ..CellStyle::new(color, BLACK)
        },
        (Piece::Block, None) => CellStyle::new(BLACK, WHITE),
        _ => CellStyle::default(),
    }
}

pub struct FaceView {
    /// Cell width in terminal columns.
    cell_w: u16,
    /// Draw `Empty` as its debug token instead of a blank.
    show_empty: bool,
}

impl Default for FaceView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_empty: true,
        }
    }
}

impl FaceView {
    pub fn new(cell_w: u16, show_empty: bool) -> Self {
        Self {
            cell_w: cell_w.max(1),
            show_empty,
        }
    }

    fn label(board: &Board) -> String {
        format!("Face {}", board.face())
    }

    /// Columns and rows needed for one face: a label line plus one line per row
    pub fn size(&self, board: &Board) -> (u16, u16) {
        let extent = board.extent() as u16;
        let grid_w = extent.saturating_mul(self.cell_w);
        let label_w = Self::label(board).len() as u16;
        (grid_w.max(label_w), extent.saturating_add(1))
    }

    /// Draw `board` with its top-left corner at `(x, y)`
    pub fn draw(&self, board: &Board, fb: &mut FrameBuffer, x: u16, y: u16) {
        fb.put_str(x, y, &Self::label(board), CellStyle::default());
        for at in board.points() {
            let piece = board[at];
            let ch = match piece {
                Piece::Empty if !self.show_empty => ' ',
                _ => piece.token(),
            };
            let cx = x.saturating_add((at.x as u16).saturating_mul(self.cell_w));
            let cy = y.saturating_add(1).saturating_add(at.y as u16);
            fb.put_char(cx, cy, ch, piece_style(piece));
        }
    }

    /// Fresh framebuffer holding only this face
    pub fn frame(&self, board: &Board) -> FrameBuffer {
        let (w, h) = self.size(board);
        let mut fb = FrameBuffer::new(w, h);
        self.draw(board, &mut fb, 0, 0);
        fb
    }
}

/// Debug map of one face under a `Face X` label
pub fn render_face(board: &Board) -> String {
    FaceView::default().frame(board).to_plain_string()
}

/// All six faces in face order, separated by blank lines
pub fn render_cube(cube: &Cube) -> String {
    let view = FaceView::default();
    cube.boards()
        .map(|board| view.frame(board).to_plain_string())
        .collect::<Vec<_>>()
        .join("\n")
}
