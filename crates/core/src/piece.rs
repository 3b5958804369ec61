//! Active piece - the one falling piece the player controls

use serde::Serialize;

use crate::catalog::{self, Offsets, PHASES_PER_TURN};
use crate::types::{PieceKind, BLOCKS_PER_PIECE, BOARD_WIDTH};

/// Spawn column shared by every kind
pub const SPAWN_X: i8 = BOARD_WIDTH as i8 / 2 - 1;

/// Spawn row for a kind
///
/// T spawns one row higher because its template's top row is empty.
pub fn spawn_y(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::T => -1,
        _ => 0,
    }
}

/// Active falling piece
///
/// `offsets` is private: it only changes through [`ActivePiece::spawn`] and
/// committed rotations, so it always matches `kind` and `phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActivePiece {
    kind: PieceKind,
    x: i8,
    y: i8,
    phase: u8,
    offsets: Offsets,
}

impl ActivePiece {
    /// Create a piece of `kind` at its spawn position in phase 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: spawn_y(kind),
            phase: 0,
            offsets: catalog::shape_of(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Rotation phase, 0..4
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Block offsets relative to the anchor in the current phase
    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// Absolute board positions of the four blocks
    pub fn cells(&self) -> [(i8, i8); BLOCKS_PER_PIECE] {
        Self::cells_at(self.x, self.y, &self.offsets)
    }

    /// Absolute positions of `offsets` placed at anchor (x, y)
    pub fn cells_at(x: i8, y: i8, offsets: &Offsets) -> [(i8, i8); BLOCKS_PER_PIECE] {
        offsets.map(|(dx, dy)| (x + dx, y + dy))
    }

    /// Copy of this piece with the anchor moved by (dx, dy)
    pub(crate) fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece turned one step, without any collision check
    pub(crate) fn rotated(&self) -> Self {
        Self {
            offsets: catalog::rotated_offsets(self.kind, self.phase, &self.offsets),
            phase: (self.phase + 1) % PHASES_PER_TURN,
            ..*self
        }
    }
}
