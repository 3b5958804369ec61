//! Read-only views of a game for renderers, logs and tests

use std::fmt::Write as _;

use serde::Serialize;

use crate::catalog::Offsets;
use crate::das::HoldCounter;
use crate::game_state::GameState;
use crate::piece::ActivePiece;
use crate::types::{cell_from_u8, MoveDirection, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Board as bytes, row-major (0 = empty, 1..=7 = kind)
pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub phase: u8,
    pub offsets: Offsets,
}

impl ActiveSnapshot {
    /// Absolute positions of the four blocks
    pub fn cells(&self) -> [(i8, i8); 4] {
        ActivePiece::cells_at(self.x, self.y, &self.offsets)
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            x: value.x(),
            y: value.y(),
            phase: value.phase(),
            offsets: *value.offsets(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DasSnapshot {
    pub left: HoldCounter,
    pub right: HoldCounter,
    pub down: HoldCounter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub start_level: u32,
    pub level: u32,
    pub score: u32,
    pub lines_at_level: u32,
    pub total_lines: u32,
    pub level_threshold: u32,
    pub frame: u64,
    pub descent_interval: u32,
    pub lock_grace: bool,
    pub das: DasSnapshot,
    pub seed: u32,
    pub pieces_spawned: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        state.board().write_u8_grid(&mut board);
        let progress = state.progress();
        let das = state.das();
        Self {
            board,
            active: state.active().into(),
            next: state.next_kind(),
            start_level: state.start_level(),
            level: progress.level,
            score: progress.score,
            lines_at_level: progress.lines_at_level,
            total_lines: progress.total_lines,
            level_threshold: progress.threshold,
            frame: state.frame(),
            descent_interval: state.descent_interval(),
            lock_grace: state.lock_grace(),
            das: DasSnapshot {
                left: das.counter(MoveDirection::Left),
                right: das.counter(MoveDirection::Right),
                down: das.counter(MoveDirection::Down),
            },
            seed: state.seed(),
            pieces_spawned: state.pieces_spawned(),
            game_over: state.is_game_over(),
        }
    }

    /// Kind locked at (x, y), `None` when empty or outside the grid
    pub fn cell(&self, x: i8, y: i8) -> Option<PieceKind> {
        if x < 0 || y < 0 {
            return None;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .and_then(|&v| cell_from_u8(v))
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Human-readable dump: counters, the active piece, then the board with
    /// one letter per locked cell and `-` for empty ones
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_dump(&mut out);
        out
    }

    fn write_dump(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "level = {}", self.level)?;
        writeln!(out, "score = {}", self.score)?;
        writeln!(out, "lines_at_level = {}", self.lines_at_level)?;
        writeln!(out, "level_threshold = {}", self.level_threshold)?;
        writeln!(out, "total_lines = {}", self.total_lines)?;
        writeln!(out, "descent_interval = {}", self.descent_interval)?;
        writeln!(out, "frame = {}", self.frame)?;
        writeln!(
            out,
            "das frames = left {} / right {} / down {}",
            self.das.left.frames_held, self.das.right.frames_held, self.das.down.frames_held
        )?;
        writeln!(out, "lock_grace = {}", self.lock_grace)?;
        writeln!(out, "game_over = {}", self.game_over)?;

        writeln!(out, "\nactive:")?;
        writeln!(out, "\tkind = {}", self.active.kind.letter())?;
        writeln!(out, "\tx = {}", self.active.x)?;
        writeln!(out, "\ty = {}", self.active.y)?;
        writeln!(out, "\tphase = {}", self.active.phase)?;
        let offsets: Vec<String> = self
            .active
            .offsets
            .iter()
            .map(|(dx, dy)| format!("({dx}, {dy})"))
            .collect();
        writeln!(out, "\toffsets = [{}]", offsets.join(", "))?;

        writeln!(out, "\nnext = {}", self.next.letter())?;

        writeln!(out, "\nboard:")?;
        for row in &self.board {
            out.push('\t');
            for &v in row {
                let ch = cell_from_u8(v).map_or('-', |kind| kind.letter());
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        Ok(())
    }
}
