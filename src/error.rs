use thiserror::Error;

use crate::audio::EngineError;
use crate::input::InputError;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Input(#[from] InputError),
}
