//! Screen layout: where the well, its frame and the HUD sit in the terminal.
//!
//! Pure arithmetic, no drawing. Each board cell is `cell_w` x `cell_h`
//! terminal cells; 2x1 compensates for the usual glyph aspect ratio.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub viewport: Viewport,
    /// Top-left corner of the frame around the well
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    /// First column of the HUD, right of the frame
    pub hud_x: u16,
}

impl Layout {
    pub const DEFAULT_CELL_W: u16 = 2;
    pub const DEFAULT_CELL_H: u16 = 1;

    /// Center the well in `viewport`
    pub fn centered(viewport: Viewport) -> Self {
        Self::with_cell_size(viewport, Self::DEFAULT_CELL_W, Self::DEFAULT_CELL_H)
    }

    pub fn with_cell_size(viewport: Viewport, cell_w: u16, cell_h: u16) -> Self {
        let frame_w = (BOARD_WIDTH as u16) * cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * cell_h + 2;
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        Self {
            viewport,
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            cell_w,
            cell_h,
            hud_x: frame_x.saturating_add(frame_w).saturating_add(2),
        }
    }

    /// Terminal position of the top-left corner of board cell (x, y)
    ///
    /// `None` for cells outside the grid, e.g. the rows above the top edge a
    /// freshly spawned piece may poke into.
    pub fn cell_origin(&self, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((
            self.frame_x + 1 + (x as u16) * self.cell_w,
            self.frame_y + 1 + (y as u16) * self.cell_h,
        ))
    }

    /// Whether the HUD has room next to the frame
    pub fn hud_fits(&self, min_width: u16) -> bool {
        self.hud_x < self.viewport.width && self.viewport.width - self.hud_x >= min_width
    }
}
