//! DAS (delayed auto shift) tracker
//!
//! Turns one [`InputSnapshot`] per tick into discrete commands:
//!
//! - A fresh press fires exactly one command immediately. When several buttons
//!   go down in the same tick only the first of rotate, left, right, soft drop
//!   fires.
//! - The most recently pressed direction that is still held counts frames.
//!   When its count reaches `delay` it repeats once, then once every
//!   `interval` frames for as long as it stays held.
//! - Pressing another direction or releasing the key resets the count.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{
    InputSnapshot, MoveDirection, DEFAULT_DAS_DELAY_FRAMES, DEFAULT_DAS_INTERVAL_FRAMES,
};

const DIRECTIONS: [MoveDirection; 3] = [MoveDirection::Left, MoveDirection::Right, MoveDirection::Down];

/// Frame thresholds for auto-repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DasConfig {
    /// Frames held before the first repeat
    pub delay: u32,
    /// Frames between repeats
    pub interval: u32,
}

impl DasConfig {
    pub fn new(delay: u32, interval: u32) -> Self {
        Self {
            delay,
            interval: interval.max(1),
        }
    }
}

impl Default for DasConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DAS_DELAY_FRAMES, DEFAULT_DAS_INTERVAL_FRAMES)
    }
}

/// A discrete request for the movement engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    Rotate,
    Move(MoveDirection),
}

/// Commands issued in one tick (a fresh press plus at most one repeat)
pub type Commands = ArrayVec<Command, 2>;

/// Hold state of one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct HoldCounter {
    pub frames_held: u32,
    pub repeat_active: bool,
}

impl HoldCounter {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DasTracker {
    config: DasConfig,
    left: HoldCounter,
    right: HoldCounter,
    down: HoldCounter,
    /// Direction currently allowed to repeat
    focus: Option<MoveDirection>,
}

impl DasTracker {
    pub fn new(config: DasConfig) -> Self {
        Self {
            config,
            left: HoldCounter::default(),
            right: HoldCounter::default(),
            down: HoldCounter::default(),
            focus: None,
        }
    }

    pub fn config(&self) -> DasConfig {
        self.config
    }

    pub fn counter(&self, direction: MoveDirection) -> HoldCounter {
        match direction {
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
            MoveDirection::Down => self.down,
        }
    }

    fn counter_mut(&mut self, direction: MoveDirection) -> &mut HoldCounter {
        match direction {
            MoveDirection::Left => &mut self.left,
            MoveDirection::Right => &mut self.right,
            MoveDirection::Down => &mut self.down,
        }
    }

    /// Consume one tick of input
    pub fn process(&mut self, input: &InputSnapshot) -> Commands {
        let mut commands = Commands::new();

        for direction in DIRECTIONS {
            if !input.direction(direction).is_down() {
                self.counter_mut(direction).reset();
                if self.focus == Some(direction) {
                    self.focus = None;
                }
            }
        }

        if let Some(fresh) = fresh_command(input) {
            commands.push(fresh);
        }

        if let Some(pressed) = DIRECTIONS
            .into_iter()
            .find(|&d| input.direction(d).is_pressed())
        {
            self.focus = Some(pressed);
            for direction in DIRECTIONS {
                self.counter_mut(direction).reset();
            }
            return commands;
        }

        if let Some(direction) = self.focus {
            if input.direction(direction).is_held() && self.tick_hold(direction) {
                commands.push(Command::Move(direction));
            }
        }

        commands
    }

    /// Count one held frame; returns whether a repeat fires on it
    fn tick_hold(&mut self, direction: MoveDirection) -> bool {
        let DasConfig { delay, interval } = self.config;
        let counter = self.counter_mut(direction);
        counter.frames_held = counter.frames_held.saturating_add(1);
        if counter.frames_held < delay {
            return false;
        }
        counter.repeat_active = true;
        (counter.frames_held - delay) % interval == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

impl Default for DasTracker {
    fn default() -> Self {
        Self::new(DasConfig::default())
    }
}

fn fresh_command(input: &InputSnapshot) -> Option<Command> {
    if input.rotate.is_pressed() {
        Some(Command::Rotate)
    } else if input.left.is_pressed() {
        Some(Command::Move(MoveDirection::Left))
    } else if input.right.is_pressed() {
        Some(Command::Move(MoveDirection::Right))
    } else if input.soft_drop.is_pressed() {
        Some(Command::Move(MoveDirection::Down))
    } else {
        None
    }
}
