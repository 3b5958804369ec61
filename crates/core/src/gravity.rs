//! Gravity and lock scheduler
//!
//! Automatic descent is frame-counted: on every frame whose number is a
//! multiple of the descent interval the piece tries to fall one row. A piece
//! that lands is not locked straight away; it gets one grace tick during which
//! it may still slide or rotate. If it is still resting on something when the
//! grace tick ends it is deposited and the next piece spawns.

use tracing::debug;

use crate::collision::has_landed;
use crate::game_state::GameState;
use crate::movement::try_move;
use crate::piece::ActivePiece;
use crate::types::{MoveDirection, PieceKind};

/// Frames per automatic one-row drop at `level`
///
/// | Level | Frames |
/// |-------|--------|
/// | 0-14 | 51 - 3 * level |
/// | 15-29 | 10 - level / 4 |
/// | 30-39 | 2 |
/// | 40+ | 1 |
pub fn descent_interval(level: u32) -> u32 {
    let frames = match level {
        0..=14 => 51 - 3 * level,
        15..=29 => 10 - level / 4,
        30..=39 => 2,
        _ => 1,
    };
    frames.max(1)
}

/// What the scheduler did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// Still falling (or waiting for the next gravity frame)
    Falling,
    /// Landed this tick; the lock is deferred to the next tick
    GraceStarted,
    /// Slid off its support during the grace tick
    GraceCancelled,
    /// Locked into the board; the next piece has spawned
    Deposited { kind: PieceKind },
}

impl GameState {
    /// Run the automatic descent and the lock-grace state machine
    ///
    /// `soft_dropped` is true when the player already issued a downward move
    /// this tick; that replaces the automatic step.
    pub(crate) fn apply_gravity(&mut self, soft_dropped: bool) -> GravityOutcome {
        let mut attempted_down = soft_dropped;
        if !soft_dropped && self.frame % u64::from(self.descent_interval) == 0 {
            try_move(&mut self.active, &self.board, MoveDirection::Down);
            attempted_down = true;
        }

        let landed = has_landed(&self.board, &self.active);

        if self.lock_grace {
            if landed {
                let kind = self.deposit_active();
                return GravityOutcome::Deposited { kind };
            }
            self.lock_grace = false;
            return GravityOutcome::GraceCancelled;
        }

        if attempted_down && landed {
            self.lock_grace = true;
            return GravityOutcome::GraceStarted;
        }

        GravityOutcome::Falling
    }

    /// Lock the active piece into the board and bring in the next one
    fn deposit_active(&mut self) -> PieceKind {
        let kind = self.active.kind();
        let cells = self.active.cells();
        let written = self.board.deposit(&cells, kind);
        debug!(
            ?kind,
            x = self.active.x(),
            y = self.active.y(),
            phase = self.active.phase(),
            written,
            "piece deposited"
        );

        self.lock_grace = false;
        self.spawn_next();
        kind
    }

    /// Make `next_kind` the active piece and draw a fresh look-ahead
    pub(crate) fn spawn_next(&mut self) {
        self.active = ActivePiece::spawn(self.next_kind);
        self.next_kind = self.rng.next_kind();
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
    }
}
