//! Game state module - owns everything one game needs and runs the tick
//!
//! One call to [`GameState::advance`] is one frame. The order inside a frame
//! is fixed:
//!
//! 1. input: the DAS tracker turns the snapshot into commands, which are
//!    applied to the active piece
//! 2. gravity and lock grace (may deposit and spawn)
//! 3. line clear and scoring, only after a deposit
//! 4. level-up check
//! 5. frame counter increment
//! 6. game-over test of the now-current piece against the board

use serde::Serialize;
use tracing::{debug, info};

use crate::board::Board;
use crate::collision::collides;
use crate::das::{Command, DasConfig, DasTracker};
use crate::gravity::{descent_interval, GravityOutcome};
use crate::movement::{try_move, try_rotate};
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::scoring::Progress;
use crate::snapshot::GameSnapshot;
use crate::types::{InputSnapshot, MoveDirection, PieceKind};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// At least one translation command succeeded
    pub moved: bool,
    pub rotated: bool,
    /// The piece landed and its one-tick grace started
    pub grace_started: bool,
    /// Kind of the piece locked into the board this tick
    pub deposited: Option<PieceKind>,
    pub rows_cleared: u8,
    pub points: u32,
    pub leveled_up: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) active: ActivePiece,
    pub(crate) next_kind: PieceKind,
    start_level: u32,
    progress: Progress,
    /// Starts at 1 and increments once per tick
    pub(crate) frame: u64,
    pub(crate) descent_interval: u32,
    /// Set on the tick the piece lands; the lock is decided on the next one
    pub(crate) lock_grace: bool,
    das: DasTracker,
    pub(crate) rng: SimpleRng,
    seed: u32,
    /// Pieces brought into play, including the first one
    pub(crate) pieces_spawned: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the default DAS timings
    pub fn new(start_level: u32, seed: u32) -> Self {
        Self::with_das(start_level, seed, DasConfig::default())
    }

    /// Create a new game with custom DAS timings
    pub fn with_das(start_level: u32, seed: u32, das: DasConfig) -> Self {
        Self::build(Board::new(), start_level, seed, das)
    }

    /// Create a game over a prepared board (scenario setup)
    pub fn from_board(board: Board, start_level: u32, seed: u32) -> Self {
        Self::build(board, start_level, seed, DasConfig::default())
    }

    fn build(board: Board, start_level: u32, seed: u32, das: DasConfig) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = rng.next_kind();
        let next_kind = rng.next_kind();
        Self {
            board,
            active: ActivePiece::spawn(first),
            next_kind,
            start_level,
            progress: Progress::new(start_level),
            frame: 1,
            descent_interval: descent_interval(start_level),
            lock_grace: false,
            das: DasTracker::new(das),
            rng,
            seed,
            pieces_spawned: 1,
            game_over: false,
        }
    }

    /// Fresh game with the same start level and DAS timings
    ///
    /// The new seed is drawn from this game's random source, so a restarted
    /// run is still reproducible from the first seed.
    pub fn restart(&self) -> Self {
        let mut rng = self.rng.clone();
        let seed = rng.next_u32();
        info!(start_level = self.start_level, seed, "restarting game");
        Self::with_das(self.start_level, seed, self.das.config())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    /// Replace the active piece (scenario setup)
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    /// Replace the look-ahead kind (scenario setup)
    pub fn set_next_kind(&mut self, kind: PieceKind) {
        self.next_kind = kind;
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frames per automatic one-row drop at the current level
    pub fn descent_interval(&self) -> u32 {
        self.descent_interval
    }

    pub fn lock_grace(&self) -> bool {
        self.lock_grace
    }

    pub fn das(&self) -> &DasTracker {
        &self.das
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Read-only view of the whole state
    pub fn describe(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Run exactly one tick
    ///
    /// Once the game is over further calls change nothing and keep reporting
    /// game over; the caller is expected to [`restart`](Self::restart).
    pub fn advance(&mut self, input: &InputSnapshot) -> TickReport {
        let mut report = TickReport::default();
        if self.game_over {
            report.game_over = true;
            return report;
        }

        // 1. input
        let mut soft_dropped = false;
        for command in self.das.process(input) {
            match command {
                Command::Rotate => {
                    report.rotated |= try_rotate(&mut self.active, &self.board);
                }
                Command::Move(direction) => {
                    report.moved |= try_move(&mut self.active, &self.board, direction);
                    if direction == MoveDirection::Down {
                        soft_dropped = true;
                    }
                }
            }
        }

        // 2. gravity and lock grace
        match self.apply_gravity(soft_dropped) {
            GravityOutcome::GraceStarted => report.grace_started = true,
            GravityOutcome::Deposited { kind } => {
                report.deposited = Some(kind);
                // 3. line clear and scoring
                let cleared = self.board.clear_full_rows();
                if !cleared.is_empty() {
                    report.rows_cleared = cleared.len() as u8;
                    report.points = self.progress.record_clear(cleared.len());
                    debug!(
                        rows = ?cleared.as_slice(),
                        points = report.points,
                        score = self.progress.score,
                        "rows cleared"
                    );
                }
            }
            GravityOutcome::Falling | GravityOutcome::GraceCancelled => {}
        }

        // 4. level-up
        if self.progress.check_level_up() {
            self.descent_interval = descent_interval(self.progress.level);
            report.leveled_up = true;
            debug!(
                level = self.progress.level,
                descent_interval = self.descent_interval,
                "level up"
            );
        }

        // 5. frame counter
        self.frame += 1;

        // 6. game over
        if collides(&self.board, &self.active.cells()) {
            self.game_over = true;
            info!(
                score = self.progress.score,
                level = self.progress.level,
                lines = self.progress.total_lines,
                pieces = self.pieces_spawned,
                "game over"
            );
        }
        report.game_over = self.game_over;
        report
    }
}
