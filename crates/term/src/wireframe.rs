//! Wireframe display mode: outlined blocks on a dark well.
//!
//! Adjacent cells of the same kind share an outline, so a locked piece (or a
//! run of same-kind cells) reads as one shape instead of a stack of boxes.
//! Each board cell is two terminal columns; the left column carries the left
//! edge, the right column the right edge, and both carry the top and bottom.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, FrameGlyphs, Rgb};
use crate::layout::Layout;
use crate::render::{piece_color, DisplayMode, Renderer};
use crate::types::{cell_from_u8, PieceKind};

const BACKGROUND: Rgb = Rgb::new(26, 29, 40);

/// Which edges of a cell get drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Sides {
    pub const ALL: Sides = Sides {
        up: true,
        down: true,
        left: true,
        right: true,
    };

    /// Edges of the cell at (x, y) given a predicate telling whether a
    /// neighbouring position belongs to the same shape
    pub fn exposed(x: i8, y: i8, same: impl Fn(i8, i8) -> bool) -> Self {
        Sides {
            up: !same(x, y - 1),
            down: !same(x, y + 1),
            left: !same(x - 1, y),
            right: !same(x + 1, y),
        }
    }

    /// Glyph pair for one board cell (left column, right column)
    pub fn glyphs(&self) -> (char, char) {
        (
            half_glyph(self.left, self.up, self.down, ['[', '┌', '└', '│']),
            half_glyph(self.right, self.up, self.down, [']', '┐', '┘', '│']),
        )
    }
}

/// `edge_glyphs` = [edge+up+down, edge+up, edge+down, edge only]
fn half_glyph(edge: bool, up: bool, down: bool, edge_glyphs: [char; 4]) -> char {
    match (edge, up, down) {
        (true, true, true) => edge_glyphs[0],
        (true, true, false) => edge_glyphs[1],
        (true, false, true) => edge_glyphs[2],
        (true, false, false) => edge_glyphs[3],
        (false, true, true) => '═',
        (false, true, false) => '▔',
        (false, false, true) => '▁',
        (false, false, false) => ' ',
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WireframeRenderer;

impl WireframeRenderer {
    fn outline_cell(
        &self,
        layout: &Layout,
        fb: &mut FrameBuffer,
        (x, y): (i8, i8),
        kind: PieceKind,
        sides: Sides,
    ) {
        let Some((px, py)) = layout.cell_origin(x, y) else {
            return;
        };
        let style = CellStyle::new(piece_color(kind), BACKGROUND).bold();
        let (left, right) = sides.glyphs();
        for dy in 0..layout.cell_h {
            fb.put_char(px, py + dy, left, style);
            for dx in 1..layout.cell_w.saturating_sub(1) {
                let mid = if sides.up && sides.down { '═' } else { ' ' };
                fb.put_char(px + dx, py + dy, mid, style);
            }
            if layout.cell_w > 1 {
                fb.put_char(px + layout.cell_w - 1, py + dy, right, style);
            }
        }
    }
}

impl Renderer for WireframeRenderer {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Wireframe
    }

    fn background(&self) -> CellStyle {
        CellStyle::new(Rgb::WHITE, BACKGROUND)
    }

    fn text_style(&self) -> CellStyle {
        CellStyle::new(Rgb::WHITE, BACKGROUND)
    }

    fn draw_board(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                let Some(kind) = cell_from_u8(v) else {
                    continue;
                };
                let (x, y) = (x as i8, y as i8);
                let sides = Sides::exposed(x, y, |nx, ny| snap.cell(nx, ny) == Some(kind));
                self.outline_cell(layout, fb, (x, y), kind, sides);
            }
        }
    }

    fn draw_borders(&self, layout: &Layout, fb: &mut FrameBuffer) {
        fb.draw_frame(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            FrameGlyphs::DOUBLE,
            CellStyle::new(Rgb::WHITE, BACKGROUND),
        );
    }

    fn draw_active_piece(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        let cells = snap.active.cells();
        for &(x, y) in &cells {
            let sides = Sides::exposed(x, y, |nx, ny| cells.contains(&(nx, ny)));
            self.outline_cell(layout, fb, (x, y), snap.active.kind, sides);
        }
    }
}
