//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four game buttons and samples them
//! into one [`crate::types::InputSnapshot`] per tick. Front-end commands (quit,
//! restart, debug dump) are mapped separately and never reach the engine.
//! Works on terminals without key-release events by timing keys out.

pub mod map;
pub mod sampler;

pub use blockfall_types as types;

pub use map::{map_front_command, map_game_key, should_quit, FrontCommand, GameKey};
pub use sampler::{KeySampler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
