//! Key sampler: turns a stream of terminal key events into one
//! [`InputSnapshot`] per tick.
//!
//! Each button reports `Pressed` on the first tick after it went down, `Held`
//! on every later tick while it stays down, and `Released` otherwise. A tap
//! that goes down and up between two ticks still reports `Pressed` once.
//!
//! Many terminals never send release events; they resend the press while a key
//! is held. A button that has not been refreshed for the release timeout is
//! therefore treated as released.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_game_key, GameKey};
use crate::types::{InputSnapshot, KeyState};

// A short timeout keeps a single tap from turning into a sustained hold that
// would trigger auto-repeat.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, Default)]
struct ButtonSlot {
    down: bool,
    /// Went down since the last sample
    pending_press: bool,
    last_seen: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct KeySampler {
    slots: [ButtonSlot; 4],
    release_timeout: Duration,
}

impl KeySampler {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            slots: [ButtonSlot::default(); 4],
            release_timeout,
        }
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Feed one terminal key event; returns the game button it touched
    pub fn handle_event(&mut self, key: &KeyEvent, now: Instant) -> Option<GameKey> {
        let button = map_game_key(key.code)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(button, now),
            KeyEventKind::Release => self.release(button),
        }
        Some(button)
    }

    pub fn press(&mut self, button: GameKey, now: Instant) {
        let slot = &mut self.slots[button.index()];
        if !slot.down {
            slot.down = true;
            slot.pending_press = true;
        }
        slot.last_seen = Some(now);
    }

    pub fn release(&mut self, button: GameKey) {
        let slot = &mut self.slots[button.index()];
        slot.down = false;
        slot.last_seen = None;
    }

    /// Whether `button` is currently considered down (ignoring timeouts)
    pub fn is_down(&self, button: GameKey) -> bool {
        self.slots[button.index()].down
    }

    /// Build the snapshot for the tick starting at `now`
    pub fn sample(&mut self, now: Instant) -> InputSnapshot {
        let mut states = [KeyState::Released; 4];
        for (slot, state) in self.slots.iter_mut().zip(states.iter_mut()) {
            if slot.down {
                let stale = slot
                    .last_seen
                    .is_some_and(|seen| now.saturating_duration_since(seen) > self.release_timeout);
                if stale {
                    slot.down = false;
                    slot.last_seen = None;
                }
            }

            *state = if slot.pending_press {
                slot.pending_press = false;
                KeyState::Pressed
            } else if slot.down {
                KeyState::Held
            } else {
                KeyState::Released
            };
        }

        InputSnapshot {
            rotate: states[GameKey::Rotate.index()],
            left: states[GameKey::Left.index()],
            right: states[GameKey::Right.index()],
            soft_drop: states[GameKey::SoftDrop.index()],
        }
    }

    /// Forget every button (used on restart)
    pub fn reset(&mut self) {
        self.slots = [ButtonSlot::default(); 4];
    }
}

impl Default for KeySampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_then_hold() {
        let t0 = Instant::now();
        let mut sampler = KeySampler::new();
        sampler.handle_event(&event(KeyCode::Left, KeyEventKind::Press), t0);

        assert_eq!(sampler.sample(t0).left, KeyState::Pressed);
        assert_eq!(sampler.sample(t0 + Duration::from_millis(16)).left, KeyState::Held);
    }

    #[test]
    fn test_release_event() {
        let t0 = Instant::now();
        let mut sampler = KeySampler::new();
        sampler.handle_event(&event(KeyCode::Char('d'), KeyEventKind::Press), t0);
        sampler.sample(t0);
        sampler.handle_event(&event(KeyCode::Char('d'), KeyEventKind::Release), t0);
        assert_eq!(sampler.sample(t0).right, KeyState::Released);
    }

    #[test]
    fn test_tap_between_ticks_reports_press_once() {
        let t0 = Instant::now();
        let mut sampler = KeySampler::new();
        sampler.handle_event(&event(KeyCode::Up, KeyEventKind::Press), t0);
        sampler.handle_event(&event(KeyCode::Up, KeyEventKind::Release), t0);

        assert_eq!(sampler.sample(t0).rotate, KeyState::Pressed);
        assert_eq!(sampler.sample(t0).rotate, KeyState::Released);
    }

    #[test]
    fn test_timeout_releases_without_release_event() {
        let t0 = Instant::now();
        let mut sampler = KeySampler::with_release_timeout(Duration::from_millis(100));
        sampler.handle_event(&event(KeyCode::Down, KeyEventKind::Press), t0);
        sampler.sample(t0);

        assert_eq!(
            sampler.sample(t0 + Duration::from_millis(90)).soft_drop,
            KeyState::Held
        );
        assert_eq!(
            sampler.sample(t0 + Duration::from_millis(120)).soft_drop,
            KeyState::Released
        );
        assert!(!sampler.is_down(GameKey::SoftDrop));
    }

    #[test]
    fn test_repeated_press_events_keep_key_held() {
        let t0 = Instant::now();
        let mut sampler = KeySampler::with_release_timeout(Duration::from_millis(100));
        sampler.handle_event(&event(KeyCode::Left, KeyEventKind::Press), t0);
        sampler.sample(t0);

        for step in 1..10u64 {
            let now = t0 + Duration::from_millis(step * 50);
            sampler.handle_event(&event(KeyCode::Left, KeyEventKind::Press), now);
            assert_eq!(sampler.sample(now).left, KeyState::Held);
        }
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let t0 = Instant::now();
        let mut sampler = KeySampler::new();
        assert_eq!(
            sampler.handle_event(&event(KeyCode::Char('x'), KeyEventKind::Press), t0),
            None
        );
        assert_eq!(sampler.sample(t0), InputSnapshot::IDLE);
    }
}
