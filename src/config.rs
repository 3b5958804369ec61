//! Command-line configuration for the terminal front end.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use crate::core::DasConfig;
use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::term::DisplayMode;
use crate::types::{DEFAULT_DAS_DELAY_FRAMES, DEFAULT_DAS_INTERVAL_FRAMES, TICKS_PER_SECOND};

pub const MAX_START_LEVEL: u32 = 99;
pub const MAX_TICK_RATE: u32 = 240;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal", long_about = None)]
pub struct Config {
    /// Level to start at (0-99). Higher levels fall faster and need more lines
    /// before the first level-up.
    #[arg(short, long, default_value_t = 0)]
    pub level: u32,

    /// Seed for the piece sequence; the same seed replays the same pieces.
    /// Defaults to one derived from the clock.
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Display mode: `solid` or `wireframe`.
    #[arg(short, long, default_value_t = DisplayMode::Solid)]
    pub display: DisplayMode,

    /// Frames a direction must be held before it starts repeating.
    #[arg(long, default_value_t = DEFAULT_DAS_DELAY_FRAMES)]
    pub das_delay: u32,

    /// Frames between repeats once a held direction repeats (at least 1).
    #[arg(long, default_value_t = DEFAULT_DAS_INTERVAL_FRAMES)]
    pub das_interval: u32,

    /// Simulation ticks per second (1-240).
    #[arg(long, default_value_t = TICKS_PER_SECOND)]
    pub tick_rate: u32,

    /// Milliseconds without a key event before a key counts as released, for
    /// terminals that never report releases.
    #[arg(long, default_value_t = DEFAULT_KEY_RELEASE_TIMEOUT_MS)]
    pub key_release_ms: u64,

    /// Write logs to this file (filtered by `RUST_LOG`, default `info`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: 0,
            seed: None,
            display: DisplayMode::Solid,
            das_delay: DEFAULT_DAS_DELAY_FRAMES,
            das_interval: DEFAULT_DAS_INTERVAL_FRAMES,
            tick_rate: TICKS_PER_SECOND,
            key_release_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_file: None,
        }
    }
}

impl Config {
    /// Reject values the front end cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.level > MAX_START_LEVEL {
            bail!("--level must be at most {MAX_START_LEVEL}, got {}", self.level);
        }
        if self.das_interval == 0 {
            bail!("--das-interval must be at least 1 frame");
        }
        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            bail!(
                "--tick-rate must be between 1 and {MAX_TICK_RATE}, got {}",
                self.tick_rate
            );
        }
        if self.key_release_ms == 0 {
            bail!("--key-release-ms must be greater than 0");
        }
        Ok(())
    }

    pub fn das(&self) -> DasConfig {
        DasConfig::new(self.das_delay, self.das_interval)
    }

    /// Wall-clock length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    pub fn key_release_timeout(&self) -> Duration {
        Duration::from_millis(self.key_release_ms)
    }
}
