//! Text rendering of cube faces.
//!
//! Faces are drawn into a small framebuffer first and then turned into either
//! plain text (the board debug map) or styled terminal output.
//!
//! - Keep `core` free of any presentation code
//! - Produce output that can be printed inline, logged, or compared in tests

pub mod face_view;
pub mod fb;
pub mod renderer;

pub use cube_match3_core as core;
pub use cube_match3_types as types;

pub use face_view::{piece_color, piece_style, render_cube, render_face, FaceView};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_into, render_face_colored};
