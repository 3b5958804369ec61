//! Terminal rendering for the game.
//!
//! Frames are drawn into a plain [`FrameBuffer`] by a [`Renderer`] chosen at
//! startup (solid or wireframe) and then flushed to the terminal by
//! [`Terminal`], which only writes the cells that changed.
//!
//! Everything up to the flush is pure and reads only a
//! [`core::GameSnapshot`], so it can be unit-tested without a terminal.

pub mod fb;
pub mod layout;
pub mod render;
pub mod solid;
pub mod terminal;
pub mod wireframe;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, FrameGlyphs, Rgb};
pub use layout::{Layout, Viewport};
pub use render::{piece_color, render_frame, renderer_for, DisplayMode, Renderer};
pub use solid::SolidRenderer;
pub use terminal::{encode_diff_into, encode_full_into, Terminal};
pub use wireframe::{Sides, WireframeRenderer};
