//! Keyboard stand-in for the player's six buttons.
//!
//! Raw mode is held for the lifetime of `KeyboardInput` so single key
//! presses arrive without Enter.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::action::{Action, InputEvent};
use super::{InputError, InputSource};

pub struct KeyboardInput {
    poll_interval: Duration,
}

impl KeyboardInput {
    pub fn new(poll_interval: Duration) -> Result<Self, InputError> {
        enable_raw_mode()?;
        Ok(Self { poll_interval })
    }
}

impl Drop for KeyboardInput {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<Option<InputEvent>, InputError> {
        if !event::poll(self.poll_interval)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(key_to_event(key)),
            _ => Ok(None),
        }
    }
}

pub(crate) fn key_to_event(key: KeyEvent) -> Option<InputEvent> {
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(InputEvent::Quit);
        }
        KeyCode::Char('q') | KeyCode::Esc => return Some(InputEvent::Quit),
        KeyCode::Char('r') => return Some(InputEvent::Rescan),
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::Play,
        KeyCode::Char('l') | KeyCode::Right => Action::Next,
        KeyCode::Char('h') | KeyCode::Left => Action::Prev,
        KeyCode::Char('k') | KeyCode::Char('+') | KeyCode::Up => Action::VolUp,
        KeyCode::Char('j') | KeyCode::Char('-') | KeyCode::Down => Action::VolDown,
        KeyCode::Char('b') => Action::HackClick,
        KeyCode::Char('m') => Action::HackLong,
        _ => return None,
    };
    Some(InputEvent::Action(action))
}

/// One line per binding, for the startup banner.
pub fn key_help() -> &'static str {
    "space/p play-pause | l/→ next | h/← prev | k/↑/+ vol up | j/↓/- vol down | b battery | m mode | r rescan | q quit"
}
