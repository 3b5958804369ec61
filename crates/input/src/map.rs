//! Key mapping from terminal events to game buttons and front-end commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One of the four buttons the engine reads each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Rotate,
    Left,
    Right,
    SoftDrop,
}

impl GameKey {
    pub const ALL: [GameKey; 4] = [GameKey::Rotate, GameKey::Left, GameKey::Right, GameKey::SoftDrop];

    pub fn index(self) -> usize {
        match self {
            GameKey::Rotate => 0,
            GameKey::Left => 1,
            GameKey::Right => 2,
            GameKey::SoftDrop => 3,
        }
    }
}

/// Commands handled by the front end rather than the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontCommand {
    Quit,
    Restart,
    DebugDump,
}

/// Map a key code to a game button.
pub fn map_game_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameKey::Rotate),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameKey::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameKey::Right)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameKey::SoftDrop)
        }
        _ => None,
    }
}

/// Map a key event to a front-end command.
pub fn map_front_command(key: KeyEvent) -> Option<FrontCommand> {
    if should_quit(key) {
        return Some(FrontCommand::Quit);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(FrontCommand::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(FrontCommand::DebugDump),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
