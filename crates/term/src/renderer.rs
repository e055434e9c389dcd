//! Encodes a framebuffer as styled terminal text.
//!
//! Output is a plain byte stream of crossterm commands, suitable for printing
//! inline. Nothing here takes over the terminal.

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    QueueableCommand,
};

use crate::core::Board;
use crate::face_view::FaceView;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Encode every cell of `fb` into `out`, one line per row.
///
/// Style changes are only emitted when the style differs from the previous cell.
pub fn encode_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print("\n"))?;
        current_style = None;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // SGR reset also clears colors, so it has to come first.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// One face with each piece in its color. `Empty` cells are blank.
pub fn render_face_colored(board: &Board) -> Result<String> {
    let fb = FaceView::new(2, false).frame(board);
    let mut out = Vec::with_capacity(fb.width() as usize * fb.height() as usize * 8);
    encode_into(&fb, &mut out)?;
    Ok(String::from_utf8(out)?)
}
