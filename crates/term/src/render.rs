//! Renderer capability and frame assembly
//!
//! A [`Renderer`] knows how one display mode draws the well, its frame, the
//! falling piece and the HUD. [`render_frame`] runs the four steps in a fixed
//! order over a read-only [`GameSnapshot`]; renderers never touch game state.

use std::fmt;
use std::str::FromStr;

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{Layout, Viewport};
use crate::solid::SolidRenderer;
use crate::types::PieceKind;
use crate::wireframe::WireframeRenderer;

/// Display mode picked once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Solid,
    Wireframe,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Solid => "solid",
            DisplayMode::Wireframe => "wireframe",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Ok(DisplayMode::Solid),
            "wireframe" => Ok(DisplayMode::Wireframe),
            other => Err(format!(
                "unknown display mode '{other}' (expected 'solid' or 'wireframe')"
            )),
        }
    }
}

/// Colors shared by both display modes, indexed like [`PieceKind::ALL`]
pub const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(230, 41, 55),   // L
    Rgb::new(253, 249, 0),   // J
    Rgb::new(0, 228, 48),    // T
    Rgb::new(0, 121, 241),   // O
    Rgb::new(200, 122, 255), // I
    Rgb::new(255, 203, 0),   // Z
    Rgb::new(102, 191, 255), // S
];

pub fn piece_color(kind: PieceKind) -> Rgb {
    PIECE_COLORS[kind.index()]
}

/// HUD needs at least this many columns right of the frame
const HUD_MIN_WIDTH: u16 = 10;

/// Drawing steps of one display mode
pub trait Renderer {
    fn mode(&self) -> DisplayMode;

    /// Style used to clear the whole screen
    fn background(&self) -> CellStyle;

    /// Style for HUD labels and values
    fn text_style(&self) -> CellStyle;

    /// Locked cells (and the empty well)
    fn draw_board(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer);

    /// Frame around the well
    fn draw_borders(&self, layout: &Layout, fb: &mut FrameBuffer);

    /// The falling piece; cells above the top edge are not drawn
    fn draw_active_piece(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer);

    /// Level, score, lines and the next piece, right of the frame
    fn draw_hud(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        if !layout.hud_fits(HUD_MIN_WIDTH) {
            return;
        }
        let label = self.text_style().bold();
        let value = self.text_style();
        let x = layout.hud_x;
        let mut y = layout.frame_y;

        for (name, number) in [
            ("LEVEL", snap.level),
            ("SCORE", snap.score),
            ("LINES", snap.total_lines),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(x, y, "NEXT", label);
        fb.put_char(x, y + 1, snap.next.letter(), value.with_fg(piece_color(snap.next)));
    }
}

/// Build the renderer for `mode`
pub fn renderer_for(mode: DisplayMode) -> Box<dyn Renderer> {
    match mode {
        DisplayMode::Solid => Box::new(SolidRenderer),
        DisplayMode::Wireframe => Box::new(WireframeRenderer),
    }
}

/// Render one frame of `snap` into `fb`, resized to `viewport`
pub fn render_frame(
    renderer: &dyn Renderer,
    snap: &GameSnapshot,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(renderer.background().into_cell(' '));

    let layout = Layout::centered(viewport);
    renderer.draw_board(snap, &layout, fb);
    renderer.draw_borders(&layout, fb);
    renderer.draw_active_piece(snap, &layout, fb);
    renderer.draw_hud(snap, &layout, fb);

    if snap.game_over {
        draw_banner(&layout, fb, "GAME OVER", "r: restart  q: quit");
    }
}

fn draw_banner(layout: &Layout, fb: &mut FrameBuffer, title: &str, hint: &str) {
    let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
    let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
    for (dy, text) in [(0, title), (1, hint)] {
        let text_w = text.chars().count() as u16;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y + dy, text, if dy == 0 { style } else { style.dim() });
    }
}
