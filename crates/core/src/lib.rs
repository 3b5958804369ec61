//! Core game logic - pure, deterministic, frame-stepped
//!
//! Everything needed to run one falling-block game lives here, with no
//! terminal, timing or I/O dependencies. A game is an owned [`GameState`] that
//! the caller advances once per frame with the current [`InputSnapshot`].
//!
//! - **Deterministic**: the same seed and the same input stream produce the
//!   same game
//! - **Frame-based**: gravity and auto-repeat count frames, never wall time
//! - **Allocation-free ticks**: fixed arrays and `ArrayVec` on the tick path
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven templates and the quarter-turn rule
//! - [`board`]: 10x20 grid of locked cells and row compaction
//! - [`piece`]: the active piece (anchor, phase, offsets)
//! - [`collision`]: collision and landing checks
//! - [`movement`]: all-or-nothing translate and rotate
//! - [`gravity`]: descent interval table and the lock-grace state machine
//! - [`scoring`]: line-clear points and level progression
//! - [`das`]: delayed auto shift for held directions
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: owns the above and runs the tick
//! - [`snapshot`]: read-only views for renderers and diagnostics
//!
//! # Rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Randomizer | uniform over the seven kinds, no bag |
//! | Rotation | one direction, no wall kicks; blocked turns are dropped |
//! | Lock | one grace tick after landing |
//! | Scoring | `(level + 1) * [0, 40, 100, 300, 1200][rows]` |
//! | Level-up | first after `10 * start + 10` lines, then every 10 |
//! | Game over | the freshly spawned piece overlaps the stack |
//!
//! # Example
//!
//! ```
//! use blockfall_core::{advance, describe, GameState};
//! use blockfall_core::types::{InputSnapshot, KeyState};
//!
//! let mut game = GameState::new(0, 12345);
//! let x = game.active().x();
//!
//! let left = InputSnapshot { left: KeyState::Pressed, ..InputSnapshot::IDLE };
//! let over = advance(&mut game, &left);
//!
//! assert!(!over);
//! assert_eq!(game.active().x(), x - 1);
//! assert_eq!(describe(&game).frame, 2);
//! ```

pub mod board;
pub mod catalog;
pub mod collision;
pub mod das;
pub mod game_state;
pub mod gravity;
pub mod movement;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use catalog::{offsets_for_phase, shape_of, Offsets};
pub use collision::{collides, has_landed};
pub use das::{Command, DasConfig, DasTracker};
pub use game_state::{GameState, TickReport};
pub use gravity::descent_interval;
pub use movement::{try_move, try_rotate};
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use scoring::{line_clear_score, Progress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

use types::InputSnapshot;

/// Start a game at `start_level` with a clock-derived seed
pub fn initialize(start_level: u32) -> GameState {
    GameState::new(start_level, rng::seed_from_clock())
}

/// Run one tick; returns whether the game is over
pub fn advance(state: &mut GameState, input: &InputSnapshot) -> bool {
    state.advance(input).game_over
}

/// Read-only view of the full state
pub fn describe(state: &GameState) -> GameSnapshot {
    state.describe()
}
