//! Input module: the button vocabulary and the sources that deliver it.

mod action;
mod keyboard;

use thiserror::Error;

pub use action::{Action, InputEvent, UnknownAction};
pub use keyboard::{KeyboardInput, key_help};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that delivers button events to the poll loop.
pub trait InputSource {
    /// Return at most one pending event. May wait briefly for one to arrive.
    fn poll(&mut self) -> Result<Option<InputEvent>, InputError>;
}
