//! Solid display mode: filled blocks on a gray well with a thin dark frame.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, FrameGlyphs, Rgb};
use crate::layout::Layout;
use crate::render::{piece_color, DisplayMode, Renderer};
use crate::types::{cell_from_u8, PieceKind};

const BACKGROUND: Rgb = Rgb::new(130, 130, 130);
const BLOCK: char = '█';

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidRenderer;

impl SolidRenderer {
    fn fill_cell(&self, layout: &Layout, fb: &mut FrameBuffer, x: i8, y: i8, kind: PieceKind) {
        if let Some((px, py)) = layout.cell_origin(x, y) {
            let style = CellStyle::new(piece_color(kind), BACKGROUND);
            fb.fill_rect(px, py, layout.cell_w, layout.cell_h, BLOCK, style);
        }
    }
}

impl Renderer for SolidRenderer {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Solid
    }

    fn background(&self) -> CellStyle {
        CellStyle::new(Rgb::BLACK, BACKGROUND)
    }

    fn text_style(&self) -> CellStyle {
        CellStyle::new(Rgb::BLACK, BACKGROUND)
    }

    fn draw_board(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if let Some(kind) = cell_from_u8(v) {
                    self.fill_cell(layout, fb, x as i8, y as i8, kind);
                }
            }
        }
    }

    fn draw_borders(&self, layout: &Layout, fb: &mut FrameBuffer) {
        fb.draw_frame(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            FrameGlyphs::LIGHT,
            CellStyle::new(Rgb::BLACK, BACKGROUND),
        );
    }

    fn draw_active_piece(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        for (x, y) in snap.active.cells() {
            self.fill_cell(layout, fb, x, y, snap.active.kind);
        }
    }
}
